//! RGB indicator LED on three PWM channels.
//!
//! Channel 0 = red, 1 = green, 2 = blue, matching `Indicator::duties`.

use defmt::debug;
use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::SimplePwm;
use prodtimer::config::PWM_MAX_DUTY;
use prodtimer::Indicator;

pub struct RgbIndicator {
    pwm: SimplePwm<'static, PWM0>,
    current: Indicator,
}

impl RgbIndicator {
    /// Take ownership of the PWM block and switch all channels off.
    pub fn new(pwm: SimplePwm<'static, PWM0>) -> Self {
        let mut led = Self {
            pwm,
            current: Indicator::Off,
        };
        led.pwm.set_max_duty(PWM_MAX_DUTY);
        led.write(Indicator::Off);
        led
    }

    /// Show `indicator`; every class other than Off lights exactly one channel.
    pub fn show(&mut self, indicator: Indicator) {
        if indicator != self.current {
            debug!("Indicator: {} -> {}", self.current, indicator);
        }
        self.write(indicator);
    }

    fn write(&mut self, indicator: Indicator) {
        for (channel, duty) in indicator.duty_counts(PWM_MAX_DUTY).into_iter().enumerate() {
            self.pwm.set_duty(channel, duty);
        }
        self.current = indicator;
    }
}
