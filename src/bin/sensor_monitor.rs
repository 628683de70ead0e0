//! Sensor monitor firmware.
//!
//! A host-side bridge forwards MQTT messages over USB serial; the
//! latest temperature and humidity are shown on the OLED.

#![no_std]
#![no_main]

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::config::HfclkSource;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_usb::class::cdc_acm::CdcAcmClass;
use embassy_usb::UsbDevice;
use tactile::board::serial::{self, UsbDriver, DELIVERY_QUEUE};
use tactile::board::{display, halt};
use tactile::config;
use tactile::sensor::{Delivery, SensorReadings};
use {defmt_rtt as _, panic_probe as _};

static DELIVERIES: Channel<CriticalSectionRawMutex, Delivery, DELIVERY_QUEUE> = Channel::new();

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) -> ! {
    serial::run_usb_device(device).await
}

#[embassy_executor::task]
async fn reader_task(
    class: CdcAcmClass<'static, UsbDriver>,
    tx: Sender<'static, CriticalSectionRawMutex, Delivery, DELIVERY_QUEUE>,
) -> ! {
    serial::reader_task(class, tx).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // USB needs the external crystal.
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.hfclk_source = HfclkSource::ExternalXtal;
    let p = embassy_nrf::init(nrf_config);
    info!("tactile sensor-monitor starting");
    info!("Bridge topics: {} {}", config::TOPIC_TEMP, config::TOPIC_HUM);

    let mut oled = match display::init(display::bus(p.TWISPI0, p.P0_26, p.P0_27)) {
        Ok(oled) => oled,
        Err(e) => {
            error!("Display init failed: {}", e);
            halt();
        }
    };

    let mut readings = SensorReadings::new();
    if let Err(e) = display::draw_readings(&mut oled, &readings) {
        warn!("Display update failed: {}", e);
    }

    let usb = serial::init(p.USBD);
    spawner.must_spawn(usb_task(usb.device));
    spawner.must_spawn(reader_task(usb.class, DELIVERIES.sender()));

    loop {
        let delivery = DELIVERIES.receive().await;
        info!("{} received: {}", delivery.quantity, delivery.value.as_str());
        readings.store(delivery);

        if let Err(e) = display::draw_readings(&mut oled, &readings) {
            warn!("Display update failed: {}", e);
        }
    }
}
