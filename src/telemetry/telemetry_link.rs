use crate::flight_control::parachute::{ParachuteEvent, ParachuteEventKind};
use crate::{event, info};
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio_util::sync::CancellationToken;

/// Sink for parachute status events.
///
/// The flight loop only ever calls `try_send`, so a slow or stalled downlink can never
/// hold up a control cycle. Events that do not fit into the buffer are dropped and counted.
#[derive(Debug)]
pub struct TelemetryLink {
    tx: Sender<ParachuteEvent>,
    dropped: u64,
}

impl TelemetryLink {
    const EVENT_BUFFER: usize = 64;

    /// Creates the link and the receiving end for the downlink task.
    pub fn new() -> (Self, Receiver<ParachuteEvent>) {
        let (tx, rx) = mpsc::channel(Self::EVENT_BUFFER);
        (Self { tx, dropped: 0 }, rx)
    }

    pub fn dropped(&self) -> u64 { self.dropped }

    pub fn publish(&mut self, evt: ParachuteEvent) {
        if self.tx.try_send(evt).is_err() {
            self.dropped += 1;
        }
    }

    /// Forwards status events to the console until cancelled or all senders are gone.
    ///
    /// # Returns
    /// The transitions that were forwarded, in order, and the number of safety resets.
    pub async fn run_downlink(mut rx: Receiver<ParachuteEvent>, c_tok: CancellationToken) -> DownlinkLog {
        let mut log = DownlinkLog::default();
        loop {
            tokio::select! {
                () = c_tok.cancelled() => break,
                maybe_evt = rx.recv() => {
                    let Some(evt) = maybe_evt else { break };
                    match evt.kind() {
                        ParachuteEventKind::SafetyReset => event!("Downlink: {evt}"),
                        _ => info!("Downlink: {evt}"),
                    }
                    log.record(evt);
                }
            }
        }
        while let Ok(evt) = rx.try_recv() {
            log.record(evt);
        }
        log
    }
}

/// Summary of everything the downlink forwarded.
///
/// Safety resets arrive every cycle on the pad and are only counted.
#[derive(Debug, Default)]
pub struct DownlinkLog {
    transitions: Vec<ParachuteEvent>,
    safety_resets: u64,
}

impl DownlinkLog {
    pub fn transitions(&self) -> &[ParachuteEvent] { &self.transitions }
    pub fn safety_resets(&self) -> u64 { self.safety_resets }
    pub fn total(&self) -> u64 { self.safety_resets + self.transitions.len() as u64 }

    fn record(&mut self, evt: ParachuteEvent) {
        if evt.kind() == ParachuteEventKind::SafetyReset {
            self.safety_resets += 1;
        } else {
            self.transitions.push(evt);
        }
    }
}
