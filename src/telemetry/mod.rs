mod emergency_latch;
mod telemetry_link;
mod uplink;

pub use emergency_latch::EmergencyLatch;
pub use telemetry_link::{DownlinkLog, TelemetryLink};
pub use uplink::{UplinkCommand, UplinkHandler};
