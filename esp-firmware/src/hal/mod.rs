// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus esp-core für die ESP32-C6 Peripherie.

pub mod indicator;
pub mod serial;

pub use indicator::GpioIndicator;
#[cfg(feature = "onboard-rgb")]
pub use indicator::RmtIndicator;
pub use serial::UartLink;
