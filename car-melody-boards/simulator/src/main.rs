//! 主机端模拟器
//!
//! 用法: `car-melody-simulator [--stop-after <ms>] [--pause <permille>] [--mute] [song ...]`
//!
//! song 可以是曲名 (pirates/got/squid/stop)、曲目编号 (0-3) 或遥控指令数组
//! (`'["♪pir",4,1]'`)。不给曲目时依次播放全部内置曲目。

mod drivers;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration as StdDuration;

use car_melody_common::*;
use car_melody_core::{EmbassyClock, MelodyPlayer, PlaybackFlags, decode_compact};
use car_melody_songs::BuiltinSongs;
use drivers::SimulatorBuzzer;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, block_for};

/// 主循环周期
const LOOP_PERIOD_MS: u64 = 1;

static FLAGS: PlaybackFlags = PlaybackFlags::new();
static EVENTS: Channel<CriticalSectionRawMutex, PlaybackEvent, 8> = Channel::new();
/// 收到远程停止后退出，不再播放队列里剩下的曲目
static QUIT: AtomicBool = AtomicBool::new(false);

#[derive(Debug, PartialEq, Eq)]
struct Options {
    queue: Vec<PlayCommand>,
    stop_after_ms: Option<u64>,
    config: PlayerConfig,
}

fn parse_command(arg: &str) -> MelodyResult<PlayCommand> {
    if arg.starts_with('[') {
        return decode_compact(arg.as_bytes()).map(|play| play.command);
    }
    match arg.parse::<u8>() {
        Ok(code) => PlayCommand::try_from(code),
        Err(_) => arg.parse(),
    }
}

fn parse_args<I>(args: I) -> Result<Options, String>
where
    I: IntoIterator<Item = String>,
{
    let mut queue = Vec::new();
    let mut stop_after_ms = None;
    let mut config = PlayerConfig::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--stop-after" => {
                let value = args.next().ok_or("--stop-after needs a value")?;
                let ms: u64 = value
                    .parse()
                    .map_err(|_| format!("invalid --stop-after value: {value}"))?;
                stop_after_ms = Some(ms);
            }
            "--pause" => {
                let value = args.next().ok_or("--pause needs a value")?;
                let permille: u16 = value
                    .parse()
                    .map_err(|_| format!("invalid --pause value: {value}"))?;
                config = config
                    .with_pause_permille(permille)
                    .map_err(|e| format!("{e}: pause must be at most 1000"))?;
            }
            "--mute" => config = config.with_enabled(false),
            _ => {
                let command = parse_command(&arg).map_err(|e| format!("{arg}: {e}"))?;
                queue.push(command);
            }
        }
    }

    if queue.is_empty() {
        queue.extend(Song::ALL.map(PlayCommand::Play));
    }

    Ok(Options {
        queue,
        stop_after_ms,
        config,
    })
}

/// 主循环: 推进播放、转发事件，空闲时取下一条指令
///
/// `quit` 置位后，等停止请求被 `tick()` 处理完就退出，不再开始新的曲目。
fn run<D, C, T, O, I>(
    player: &mut MelodyPlayer<'_, D, C, T, O>,
    events: &Channel<CriticalSectionRawMutex, PlaybackEvent, 8>,
    mut queue: I,
    quit: &AtomicBool,
) -> Vec<PlaybackEvent>
where
    D: ToneDriver,
    C: Clock,
    T: SongTable,
    O: PlaybackObserver,
    I: Iterator<Item = PlayCommand>,
{
    let mut seen = Vec::new();

    loop {
        player.tick();

        while let Ok(event) = events.try_receive() {
            info!("{} {:?}", event.song().tag(), event);
            seen.push(event);
        }

        let stop_pending = player.flags().stop_pending();
        if quit.load(Ordering::Acquire) {
            if !stop_pending {
                break;
            }
        } else if !player.is_playing() && !stop_pending {
            match queue.next() {
                Some(command) => player.apply(command),
                None => break,
            }
        }

        block_for(Duration::from_millis(LOOP_PERIOD_MS));
    }

    seen
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    // 模拟遥控端在另一个线程里下发停止
    if let Some(ms) = options.stop_after_ms {
        std::thread::spawn(move || {
            std::thread::sleep(StdDuration::from_millis(ms));
            info!("Remote stop requested after {}ms", ms);
            FLAGS.request_stop();
            QUIT.store(true, Ordering::Release);
        });
    }

    let mut player = MelodyPlayer::with_observer(
        SimulatorBuzzer::new(),
        EmbassyClock,
        BuiltinSongs,
        &FLAGS,
        &EVENTS,
    )
    .with_config(options.config);

    let events = run(&mut player, &EVENTS, options.queue.into_iter(), &QUIT);

    info!("Simulator finished after {} events", events.len());
}
