//! USB CDC-ACM serial port carrying the MQTT bridge line protocol.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral and exposes one CDC-ACM class.  The reader task turns
//! the byte stream into [`Delivery`] values for the display task.

use defmt::{info, warn};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::driver::EndpointError;
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

use crate::config;
use crate::error::Error;
use crate::sensor::Delivery;
use crate::transport::{parse_update, LineBuffer};

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

/// Depth of the reader → display channel.
pub const DELIVERY_QUEUE: usize = 4;

const MAX_PACKET_SIZE: u16 = 64;

static CDC_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Build result containing the USB device runner and the serial class.
pub struct UsbSerial {
    pub device: UsbDevice<'static, UsbDriver>,
    pub class: CdcAcmClass<'static, UsbDriver>,
}

/// Initialise the USB stack with a single CDC-ACM function.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbSerial {
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        driver,
        usb_config,
        USB_CONFIG_DESC.init([0u8; 256]),
        USB_BOS_DESC.init([0u8; 256]),
        USB_MSOS_DESC.init([0u8; 256]),
        USB_CTRL_BUF.init([0u8; 64]),
    );

    let class = CdcAcmClass::new(&mut builder, CDC_STATE.init(State::new()), MAX_PACKET_SIZE);
    let device = builder.build();

    info!("USB serial bridge initialised");

    UsbSerial { device, class }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// Read bridge lines forever, forwarding tracked readings to `tx`.
pub async fn reader_task(
    mut class: CdcAcmClass<'static, UsbDriver>,
    tx: Sender<'static, CriticalSectionRawMutex, Delivery, DELIVERY_QUEUE>,
) -> ! {
    let mut lines = LineBuffer::<{ config::MAX_LINE_LEN }>::new();

    loop {
        class.wait_connection().await;
        info!("Serial bridge connected");

        if let Err(e) = forward_lines(&mut class, &mut lines, &tx).await {
            warn!("Serial bridge disconnected: {}", e);
        }
    }
}

async fn forward_lines(
    class: &mut CdcAcmClass<'static, UsbDriver>,
    lines: &mut LineBuffer<{ config::MAX_LINE_LEN }>,
    tx: &Sender<'static, CriticalSectionRawMutex, Delivery, DELIVERY_QUEUE>,
) -> Result<(), Error> {
    let mut packet = [0u8; MAX_PACKET_SIZE as usize];

    loop {
        let n = class.read_packet(&mut packet).await.map_err(usb_error)?;

        for &byte in &packet[..n] {
            let delivery = match lines.push(byte) {
                Some(Ok(line)) => match parse_update(line) {
                    Some(update) => {
                        let delivery = update.delivery();
                        if delivery.is_none() {
                            info!("Ignoring topic {}", update.topic);
                        }
                        delivery
                    }
                    None => None,
                },
                Some(Err(e)) => {
                    warn!("Dropped bridge line: {}", e);
                    None
                }
                None => None,
            };

            if let Some(delivery) = delivery {
                tx.send(delivery).await;
            }
        }
    }
}

fn usb_error(e: EndpointError) -> Error {
    match e {
        EndpointError::BufferOverflow => Error::BufferOverflow,
        EndpointError::Disabled => Error::Usb,
    }
}
