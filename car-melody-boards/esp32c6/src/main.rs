//! ESP32-C6 开发板
//!
//! GPIO7 接无源蜂鸣器，BOOT 键 (GPIO9) 在中断里请求停止，再按一次继续播放下一首。

#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types"
)]

extern crate alloc;

mod drivers;

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use car_melody_common::*;
use car_melody_core::{MelodyPlayer, PlaybackFlags};
use car_melody_songs::BuiltinSongs;
use critical_section::Mutex;
use drivers::{BoardClock, Esp32Buzzer};
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Event, Input, InputConfig, Io, Pull};
use esp_hal::handler;
use esp_hal::ledc::Ledc;

esp_bootloader_esp_idf::esp_app_desc!();

static FLAGS: PlaybackFlags = PlaybackFlags::new();
static HELD: AtomicBool = AtomicBool::new(false);
static BUTTON: Mutex<RefCell<Option<Input<'static>>>> = Mutex::new(RefCell::new(None));

#[handler]
fn on_button() {
    critical_section::with(|cs| {
        let mut button = BUTTON.borrow_ref_mut(cs);
        let Some(button) = button.as_mut() else {
            return;
        };
        if !button.is_interrupt_set() {
            return;
        }
        button.clear_interrupt();

        if FLAGS.is_playing() {
            HELD.store(true, Ordering::Release);
            FLAGS.request_stop();
        } else {
            HELD.store(false, Ordering::Release);
        }
    });
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // serde_json 需要 alloc
    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: 16384);

    let mut io = Io::new(peripherals.IO_MUX);
    io.set_interrupt_handler(on_button);

    let mut button = Input::new(
        peripherals.GPIO9,
        InputConfig::default().with_pull(Pull::Up),
    );
    critical_section::with(|cs| {
        button.listen(Event::FallingEdge);
        BUTTON.borrow_ref_mut(cs).replace(button);
    });

    let buzzer = Esp32Buzzer::new(Ledc::new(peripherals.LEDC), peripherals.GPIO7);
    let mut player = MelodyPlayer::new(buzzer, BoardClock, BuiltinSongs, &FLAGS);

    info!("Melody player ready");

    let mut songs = Song::ALL.into_iter().cycle();

    loop {
        player.tick();

        if !player.is_playing() && !FLAGS.stop_pending() && !HELD.load(Ordering::Acquire) {
            if let Some(song) = songs.next() {
                info!("{} next up", song.tag());
                player.start(song);
            }
        }
    }
}
