#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod actuation;
mod config;
mod flight_control;
mod logger;
mod sensors;
mod telemetry;

use crate::actuation::{DigitalRelay, MotorMixer};
use crate::config::FlightConfig;
use crate::flight_control::{FlightLoop, common::flight_clock::SystemClock, common::vec2d::Vec2D};
use crate::sensors::SimulatedFlight;
use crate::telemetry::{EmergencyLatch, TelemetryLink, UplinkHandler};
use std::{env, time::Duration};
use tokio_util::sync::CancellationToken;

/// Launch site used by the ground simulation as (longitude, latitude).
const SIM_LAUNCH_POS: Vec2D<f32> = Vec2D::new(-84.396, 33.776);
/// Landing target used by the ground simulation as (longitude, latitude).
const SIM_TARGET_POS: Vec2D<f32> = Vec2D::new(-84.381, 33.790);

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let config = match FlightConfig::from_env() {
        Ok(config) => config,
        Err(e) => fatal!("Invalid flight configuration: {e} ({e:?})"),
    };
    info!(
        "Eagle Eye online. Arm at {:.0} m after {} cycles, deploy at {:.0} m, cycle {} ms.",
        config.parachute().arm_altitude(),
        config.parachute().arm_confirm_cycles(),
        config.parachute().deploy_altitude(),
        config.cycle_interval().as_millis()
    );

    let c_tok = CancellationToken::new();
    let latch = EmergencyLatch::new();
    spawn_uplink(UplinkHandler::new(latch.clone()), c_tok.clone());

    let (telemetry, event_rx) = TelemetryLink::new();
    let downlink = tokio::spawn(TelemetryLink::run_downlink(event_rx, c_tok.clone()));

    let shutdown_tok = c_tok.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, shutting down.");
            shutdown_tok.cancel();
        }
    });

    let mut f_loop = FlightLoop::new(
        &config,
        SimulatedFlight::new(SIM_LAUNCH_POS, SIM_TARGET_POS, latch),
        MotorMixer::new(),
        DigitalRelay::new(DigitalRelay::PARACHUTE_PIN),
        SystemClock,
        telemetry,
    );
    info!("Parachute online, relay on pin {}.", f_loop.relay().pin());

    match f_loop.run(c_tok.clone()).await {
        Some(report) => info!(
            "Flight ended in phase {} at {:.1} m after {} cycles.",
            report.phase(),
            report.state().current_altitude(),
            f_loop.cycles()
        ),
        None => warn!("Flight ended before the first cycle."),
    }
    let dropped = f_loop.telemetry().dropped();
    drop(f_loop);

    match downlink.await {
        Ok(log) => info!(
            "Downlinked {} status events ({} safety resets), {dropped} dropped.",
            log.total(),
            log.safety_resets()
        ),
        Err(e) => error!("Downlink task failed: {e}"),
    }
    c_tok.cancel();
}

/// Replays a scripted uplink message if `EAGLE_SIM_UPLINK` is set as `<message>@<delay_ms>`.
fn spawn_uplink(handler: UplinkHandler, c_tok: CancellationToken) {
    let Ok(script) = env::var("EAGLE_SIM_UPLINK") else {
        return;
    };
    let Some((msg, delay)) = script.split_once('@') else {
        warn!("EAGLE_SIM_UPLINK must look like <message>@<delay_ms>, got {script:?}.");
        return;
    };
    let Ok(delay_ms) = delay.trim().parse::<u64>() else {
        warn!("Invalid uplink delay {delay:?}.");
        return;
    };
    let message = msg.to_string();
    tokio::spawn(async move {
        tokio::select! {
            () = c_tok.cancelled() => {}
            () = tokio::time::sleep(Duration::from_millis(delay_ms)) => {
                handler.handle(&message);
            }
        }
    });
}
