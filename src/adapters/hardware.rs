//! ESP32-S3 hardware adapters.
//!
//! Thin wrappers over raw ESP-IDF sys calls:
//!
//! | Type              | Implements           | Peripheral             |
//! |-------------------|----------------------|------------------------|
//! | `EspOutputPin`    | `OutputPin`          | GPIO output            |
//! | `EspInputPin`     | `InputPin`           | GPIO input             |
//! | `EspAnalogInput`  | `AnalogInput`        | ADC1 oneshot           |
//! | `EspEdgeSource`   | `EdgeSource`         | per-pin GPIO ISR       |
//!
//! Constructors configure the peripheral; they are called once from
//! [`Board::init`](crate::drivers::hw_init::Board::init).

use core::ffi::c_void;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin};
use esp_idf_svc::sys::*;
use log::{debug, info};

use super::isr_slot::{self, HandlerSlot};
use crate::app::ports::{AnalogInput, Edge, EdgeHandler, EdgeSource};
use crate::app::threshold::normalize;
use crate::config::ButtonPull;
use crate::error::{PeripheralError, SensorError};
use crate::pins;

const OK: esp_err_t = ESP_OK as esp_err_t;
const ISR_SERVICE_ALREADY_INSTALLED: esp_err_t = ESP_ERR_INVALID_STATE as esp_err_t;

/// Raw ESP-IDF return code from a failed GPIO call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EspGpioError(pub i32);

impl digital::Error for EspGpioError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

fn check(rc: esp_err_t) -> Result<(), EspGpioError> {
    if rc == OK { Ok(()) } else { Err(EspGpioError(rc)) }
}

// ── Digital output ────────────────────────────────────────────

/// Push-pull output, driven low on construction.
#[derive(Debug)]
pub struct EspOutputPin {
    gpio: i32,
}

impl EspOutputPin {
    pub fn configure(gpio: i32) -> Result<Self, PeripheralError> {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << gpio,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: called once per pin from the single-threaded init path.
        let ret = unsafe { gpio_config(&cfg) };
        if ret != OK {
            return Err(PeripheralError::GpioConfigFailed(ret));
        }
        let ret = unsafe { gpio_set_level(gpio, 0) };
        if ret != OK {
            return Err(PeripheralError::GpioConfigFailed(ret));
        }
        debug!("GPIO{} output, low", gpio);
        Ok(Self { gpio })
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl ErrorType for EspOutputPin {
    type Error = EspGpioError;
}

impl OutputPin for EspOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        // SAFETY: register write on a pin this value owns; ISR-safe.
        check(unsafe { gpio_set_level(self.gpio, 0) })
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        check(unsafe { gpio_set_level(self.gpio, 1) })
    }
}

// ── Digital input ─────────────────────────────────────────────

#[derive(Debug)]
pub struct EspInputPin {
    gpio: i32,
}

impl EspInputPin {
    pub fn configure(gpio: i32, pull: ButtonPull) -> Result<Self, PeripheralError> {
        let (up, down) = match pull {
            ButtonPull::None => (gpio_pullup_t_GPIO_PULLUP_DISABLE, gpio_pulldown_t_GPIO_PULLDOWN_DISABLE),
            ButtonPull::Up => (gpio_pullup_t_GPIO_PULLUP_ENABLE, gpio_pulldown_t_GPIO_PULLDOWN_DISABLE),
            ButtonPull::Down => (gpio_pullup_t_GPIO_PULLUP_DISABLE, gpio_pulldown_t_GPIO_PULLDOWN_ENABLE),
        };
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << gpio,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: up,
            pull_down_en: down,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: called once per pin from the single-threaded init path.
        let ret = unsafe { gpio_config(&cfg) };
        if ret != OK {
            return Err(PeripheralError::GpioConfigFailed(ret));
        }
        debug!("GPIO{} input, pull={:?}", gpio, pull);
        Ok(Self { gpio })
    }

    /// Interrupt source on the same pin.
    pub fn edge_source(&self) -> EspEdgeSource {
        EspEdgeSource { gpio: self.gpio }
    }
}

impl ErrorType for EspInputPin {
    type Error = EspGpioError;
}

impl InputPin for EspInputPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        // SAFETY: read-only register access on a configured input.
        Ok(unsafe { gpio_get_level(self.gpio) } != 0)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(unsafe { gpio_get_level(self.gpio) } == 0)
    }
}

// ── ADC (oneshot) ─────────────────────────────────────────────

/// One ADC channel on its own oneshot unit.
pub struct EspAnalogInput {
    unit: adc_oneshot_unit_handle_t,
    channel: adc_channel_t,
}

impl EspAnalogInput {
    /// Resolve `gpio` to its ADC unit/channel and configure it for the
    /// full 0–3.3 V range at [`pins::ADC_RESOLUTION_BITS`].
    pub fn configure(gpio: i32) -> Result<Self, PeripheralError> {
        let mut unit_id: adc_unit_t = 0;
        let mut channel: adc_channel_t = 0;
        // SAFETY: out-pointers are valid locals.
        let ret = unsafe { adc_oneshot_io_to_channel(gpio, &mut unit_id, &mut channel) };
        if ret != OK {
            return Err(PeripheralError::AdcInitFailed(ret));
        }

        let init_cfg = adc_oneshot_unit_init_cfg_t {
            unit_id,
            ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
            ..Default::default()
        };
        let mut unit: adc_oneshot_unit_handle_t = core::ptr::null_mut();
        let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &mut unit) };
        if ret != OK {
            return Err(PeripheralError::AdcInitFailed(ret));
        }

        let chan_cfg = adc_oneshot_chan_cfg_t {
            atten: adc_atten_t_ADC_ATTEN_DB_12,
            bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
        };
        let ret = unsafe { adc_oneshot_config_channel(unit, channel, &chan_cfg) };
        if ret != OK {
            // SAFETY: unit was created above and is not shared yet.
            unsafe { adc_oneshot_del_unit(unit) };
            return Err(PeripheralError::AdcInitFailed(ret));
        }

        info!("ADC{} CH{} on GPIO{} ({}-bit)", unit_id + 1, channel, gpio, pins::ADC_RESOLUTION_BITS);
        Ok(Self { unit, channel })
    }
}

impl AnalogInput for EspAnalogInput {
    fn read(&mut self) -> Result<u16, SensorError> {
        let mut raw: i32 = 0;
        // SAFETY: unit/channel were configured in `configure`; only the
        // owning task reads.
        let ret = unsafe { adc_oneshot_read(self.unit, self.channel, &mut raw) };
        if ret != OK {
            return Err(SensorError::AdcReadFailed(ret));
        }
        Ok(normalize(raw.max(0) as u16, pins::ADC_RESOLUTION_BITS))
    }
}

// ── Edge interrupts ───────────────────────────────────────────

/// Per-pin GPIO interrupt registration.
pub struct EspEdgeSource {
    gpio: i32,
}

unsafe extern "C" fn edge_trampoline(arg: *mut c_void) {
    // SAFETY: `arg` is a leaked `HandlerSlot` registered in `on_edge`;
    // only this ISR touches it.
    unsafe { isr_slot::invoke(arg) };
}

impl EdgeSource for EspEdgeSource {
    fn on_edge(&mut self, edge: Edge, handler: EdgeHandler) -> Result<(), PeripheralError> {
        let intr = match edge {
            Edge::Rising => gpio_int_type_t_GPIO_INTR_POSEDGE,
            Edge::Falling => gpio_int_type_t_GPIO_INTR_NEGEDGE,
            Edge::Any => gpio_int_type_t_GPIO_INTR_ANYEDGE,
        };

        // SAFETY: the ISR service is shared by every pin; a second install
        // reports ISR_SERVICE_ALREADY_INSTALLED, which is fine.
        let ret = unsafe { gpio_install_isr_service(0) };
        if ret != OK && ret != ISR_SERVICE_ALREADY_INSTALLED {
            return Err(PeripheralError::IsrInstallFailed(ret));
        }

        let ret = unsafe { gpio_set_intr_type(self.gpio, intr) };
        if ret != OK {
            return Err(PeripheralError::InterruptRegistration(ret));
        }

        // Each early return drops `slot`, freeing the handler.
        let slot = HandlerSlot::new(handler);
        let ret = unsafe { gpio_isr_handler_add(self.gpio, Some(edge_trampoline), slot.as_arg()) };
        if ret != OK {
            return Err(PeripheralError::InterruptRegistration(ret));
        }

        let ret = unsafe { gpio_intr_enable(self.gpio) };
        if ret != OK {
            // SAFETY: the interrupt never fired; after removal the ISR
            // no longer references the slot.
            unsafe { gpio_isr_handler_remove(self.gpio) };
            return Err(PeripheralError::InterruptRegistration(ret));
        }
        // Live from here on: the handler stays for the life of the firmware.
        slot.leak();

        info!("GPIO{} interrupt on {:?} edge", self.gpio, edge);
        Ok(())
    }
}
