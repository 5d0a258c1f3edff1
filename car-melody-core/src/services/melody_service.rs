//! 非阻塞旋律播放
//!
//! 主循环每次迭代调用一次 [`MelodyPlayer::tick`]，播放器只比较时钟与预先算好的
//! 音符/停顿时长，从不等待。状态流转:
//!
//! ```text
//! Idle --start--> Playing --音符结束--> Pausing --停顿结束, 还有音符--> Playing ...
//!                                       Pausing --停顿结束, 没有音符--> Idle
//! ```
//!
//! 任意状态下停止都会回到 Idle。

use car_melody_common::*;

use crate::services::PlaybackFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Idle,
    Playing,
    Pausing,
}

/// 仅由主循环访问的播放状态
///
/// phase 为 Idle 当且仅当 song 为 None；非 Idle 时 index 一定小于音轨长度。
struct PlaybackState {
    song: Song,
    track: Option<&'static Track>,
    index: usize,
    phase: Phase,
    phase_start: u32,
    timing: NoteTiming,
}

impl PlaybackState {
    const fn idle() -> Self {
        Self {
            song: Song::None,
            track: None,
            index: 0,
            phase: Phase::Idle,
            phase_start: 0,
            timing: NoteTiming {
                note_ms: 0,
                pause_ms: 0,
            },
        }
    }
}

pub struct MelodyPlayer<'f, D, C, T, O = ()>
where
    D: ToneDriver,
    C: Clock,
    T: SongTable,
    O: PlaybackObserver,
{
    driver: D,
    clock: C,
    table: T,
    observer: O,
    flags: &'f PlaybackFlags,
    config: PlayerConfig,
    state: PlaybackState,
}

impl<'f, D, C, T> MelodyPlayer<'f, D, C, T, ()>
where
    D: ToneDriver,
    C: Clock,
    T: SongTable,
{
    pub fn new(driver: D, clock: C, table: T, flags: &'f PlaybackFlags) -> Self {
        Self::with_observer(driver, clock, table, flags, ())
    }
}

impl<'f, D, C, T, O> MelodyPlayer<'f, D, C, T, O>
where
    D: ToneDriver,
    C: Clock,
    T: SongTable,
    O: PlaybackObserver,
{
    pub fn with_observer(
        driver: D,
        clock: C,
        table: T,
        flags: &'f PlaybackFlags,
        observer: O,
    ) -> Self {
        Self {
            driver,
            clock,
            table,
            observer,
            flags,
            config: PlayerConfig::new(),
            state: PlaybackState::idle(),
        }
    }

    pub fn with_config(mut self, config: PlayerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// 更新配置；禁用时会立即停止当前播放
    pub fn set_config(&mut self, config: PlayerConfig) {
        self.config = config;
        if !config.enabled && self.state.phase != Phase::Idle {
            self.stop();
        }
        info!("Audio enabled: {}", config.enabled);
    }

    pub fn flags(&self) -> &'f PlaybackFlags {
        self.flags
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn is_playing(&self) -> bool {
        self.flags.is_playing()
    }

    pub fn current_song(&self) -> Song {
        self.state.song
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state.phase {
            Phase::Idle => None,
            Phase::Playing | Phase::Pausing => Some(self.state.index),
        }
    }

    /// 从头播放 `song`，丢弃正在播放的曲目
    ///
    /// `Song::None`、曲目表中不存在的曲目以及禁用状态下都不做任何事。
    pub fn start(&mut self, song: Song) {
        if song.is_none() {
            return;
        }

        if !self.config.enabled {
            info!("Audio disabled, skipping {:?}", song);
            return;
        }

        let Some(track) = self.table.track(song) else {
            warn!("No track for {:?}, ignoring", song);
            return;
        };

        if self.state.phase != Phase::Idle {
            debug!("Replacing {:?} with {:?}", self.state.song, song);
            self.silence();
        }

        let now = self.clock.now_ms();
        self.flags.arm();
        self.state = PlaybackState {
            song,
            track: Some(track),
            index: 0,
            phase: Phase::Playing,
            phase_start: now,
            timing: NoteTiming::default(),
        };
        self.begin_note(track, now);

        info!("Melody started: {:?} ({} notes)", song, track.len());
        self.observer.on_event(PlaybackEvent::Started(song));
    }

    /// 在主循环内立即停止
    ///
    /// 没有播放时只会再次关闭蜂鸣器。其他上下文应使用 [`PlaybackFlags::request_stop`]。
    pub fn stop(&mut self) {
        self.flags.disarm();
        let song = self.reset();
        self.release_output();
        self.report_stopped(song);
    }

    /// 推进播放，主循环每次迭代调用一次
    pub fn tick(&mut self) {
        if self.flags.take_stop_request() {
            let song = self.reset();
            self.release_output();
            self.report_stopped(song);
            return;
        }

        let Some(track) = self.state.track else {
            return;
        };

        let now = self.clock.now_ms();
        let elapsed = elapsed_ms(now, self.state.phase_start);

        match self.state.phase {
            Phase::Idle => {}
            Phase::Playing => {
                if elapsed < self.state.timing.note_ms {
                    return;
                }
                self.silence();
                self.state.phase = Phase::Pausing;
                self.state.phase_start = now;
            }
            Phase::Pausing => {
                if elapsed < self.state.timing.pause_ms {
                    return;
                }
                self.state.index += 1;
                if self.state.index >= track.len() {
                    self.complete();
                    return;
                }
                self.begin_note(track, now);
            }
        }
    }

    pub fn apply(&mut self, command: PlayCommand) {
        match command {
            PlayCommand::Play(song) => self.start(song),
            PlayCommand::Stop => self.stop(),
        }
    }

    fn begin_note(&mut self, track: &'static Track, now: u32) {
        let index = self.state.index;
        let Some(note) = track.get(index) else {
            return;
        };
        let timing = note.timing(track.tempo_multiplier(), self.config.pause_permille());

        self.state.timing = timing;
        self.state.phase = Phase::Playing;
        self.state.phase_start = now;

        trace!(
            "note {}: {:?} for {}ms, pause {}ms",
            index, note.pitch, timing.note_ms, timing.pause_ms
        );

        if let Some(frequency) = note.pitch.frequency() {
            if self.driver.emit(frequency, timing.note_ms).is_err() {
                warn!("Buzzer failed to emit {}Hz", frequency);
            }
        }
    }

    fn complete(&mut self) {
        let song = self.reset();
        self.flags.finish();
        self.release_output();
        info!("Melody complete: {:?}", song);
        self.observer.on_event(PlaybackEvent::Completed(song));
    }

    fn reset(&mut self) -> Song {
        let song = self.state.song;
        self.state = PlaybackState::idle();
        song
    }

    fn report_stopped(&mut self, song: Song) {
        info!("Melody stopped");
        if !song.is_none() {
            self.observer.on_event(PlaybackEvent::Stopped(song));
        }
    }

    fn silence(&mut self) {
        if self.driver.silence().is_err() {
            warn!("Buzzer failed to silence");
        }
    }

    fn release_output(&mut self) {
        self.silence();
        if self.driver.set_idle_state().is_err() {
            warn!("Buzzer failed to enter idle state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;

    use car_melody_songs::BuiltinSongs;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Emit(u32, u32),
        Silence,
        Idle,
    }

    #[derive(Default)]
    struct MockBuzzer {
        calls: Vec<Call>,
    }

    impl MockBuzzer {
        fn count(&self, wanted: Call) -> usize {
            self.calls.iter().filter(|call| **call == wanted).count()
        }

        fn emits(&self) -> Vec<(u32, u32)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Emit(freq, ms) => Some((*freq, *ms)),
                    _ => None,
                })
                .collect()
        }
    }

    impl ToneDriver for MockBuzzer {
        type Error = Infallible;

        fn emit(&mut self, frequency_hz: u32, duration_ms: u32) -> Result<(), Self::Error> {
            self.calls.push(Call::Emit(frequency_hz, duration_ms));
            Ok(())
        }

        fn silence(&mut self) -> Result<(), Self::Error> {
            self.calls.push(Call::Silence);
            Ok(())
        }

        fn set_idle_state(&mut self) -> Result<(), Self::Error> {
            self.calls.push(Call::Idle);
            Ok(())
        }
    }

    /// 每个调用都失败的蜂鸣器
    #[derive(Default)]
    struct BrokenBuzzer {
        attempts: usize,
    }

    impl ToneDriver for BrokenBuzzer {
        type Error = ();

        fn emit(&mut self, _frequency_hz: u32, _duration_ms: u32) -> Result<(), Self::Error> {
            self.attempts += 1;
            Err(())
        }

        fn silence(&mut self) -> Result<(), Self::Error> {
            self.attempts += 1;
            Err(())
        }

        fn set_idle_state(&mut self) -> Result<(), Self::Error> {
            self.attempts += 1;
            Err(())
        }
    }

    #[derive(Default)]
    struct ManualClock(Cell<u32>);

    impl ManualClock {
        fn at(ms: u32) -> Self {
            Self(Cell::new(ms))
        }

        fn advance(&self, ms: u32) {
            self.0.set(self.0.get().wrapping_add(ms));
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u32 {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<PlaybackEvent>,
    }

    impl PlaybackObserver for Recorder {
        fn on_event(&mut self, event: PlaybackEvent) {
            self.events.push(event);
        }
    }

    // 440Hz 四分音符, 八分休止, 523Hz 二分音符
    static TUNE_NOTES: [Note; 3] = [
        Note::new(Pitch::Hz(440), 4),
        Note::new(Pitch::Rest, 8),
        Note::new(Pitch::Hz(523), 2),
    ];
    static TUNE: Track = Track::new(&TUNE_NOTES, 1);

    static SLOW_NOTES: [Note; 2] = [Note::new(Pitch::Hz(262), 4), Note::new(Pitch::Hz(294), 8)];
    static SLOW: Track = Track::new(&SLOW_NOTES, 2);

    /// Pirates -> TUNE, SquidGame -> SLOW, GameOfThrones 缺失
    struct TestSongs;

    impl SongTable for TestSongs {
        fn track(&self, song: Song) -> Option<&'static Track> {
            match song {
                Song::Pirates => Some(&TUNE),
                Song::SquidGame => Some(&SLOW),
                _ => None,
            }
        }
    }

    type TestPlayer<'a> = MelodyPlayer<'a, MockBuzzer, &'a ManualClock, TestSongs, Recorder>;

    fn player<'a>(clock: &'a ManualClock, flags: &'a PlaybackFlags) -> TestPlayer<'a> {
        MelodyPlayer::with_observer(
            MockBuzzer::default(),
            clock,
            TestSongs,
            flags,
            Recorder::default(),
        )
    }

    #[test]
    fn start_emits_the_first_note() {
        let clock = ManualClock::at(1_000);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);

        player.start(Song::Pirates);

        assert!(player.is_playing());
        assert_eq!(player.current_song(), Song::Pirates);
        assert_eq!(player.phase(), Phase::Playing);
        assert_eq!(player.current_index(), Some(0));
        assert_eq!(player.driver().calls, vec![Call::Emit(440, 250)]);
        assert_eq!(
            player.observer().events,
            vec![PlaybackEvent::Started(Song::Pirates)]
        );
    }

    #[test]
    fn walks_through_note_and_pause_phases() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);
        player.start(Song::Pirates);

        clock.advance(249);
        player.tick();
        assert_eq!(player.phase(), Phase::Playing);

        clock.advance(1);
        player.tick();
        assert_eq!(player.phase(), Phase::Pausing);
        assert_eq!(player.current_index(), Some(0));

        clock.advance(74);
        player.tick();
        assert_eq!(player.phase(), Phase::Pausing);

        // 休止符: 进入 Playing 但不发声
        clock.advance(1);
        player.tick();
        assert_eq!(player.phase(), Phase::Playing);
        assert_eq!(player.current_index(), Some(1));
        assert_eq!(
            player.driver().calls,
            vec![Call::Emit(440, 250), Call::Silence]
        );

        // 125ms 休止 + 37ms 停顿
        clock.advance(125);
        player.tick();
        assert_eq!(player.phase(), Phase::Pausing);
        clock.advance(37);
        player.tick();
        assert_eq!(player.current_index(), Some(2));
        assert_eq!(player.driver().emits(), vec![(440, 250), (523, 500)]);

        clock.advance(500);
        player.tick();
        clock.advance(149);
        player.tick();
        assert!(player.is_playing());
        clock.advance(1);
        player.tick();

        assert!(!player.is_playing());
        assert_eq!(player.phase(), Phase::Idle);
        assert_eq!(player.current_song(), Song::None);
        assert_eq!(player.current_index(), None);
        assert_eq!(player.driver().calls.last(), Some(&Call::Idle));
        assert_eq!(
            player.observer().events,
            vec![
                PlaybackEvent::Started(Song::Pirates),
                PlaybackEvent::Completed(Song::Pirates)
            ]
        );
    }

    #[test]
    fn rest_consumes_its_full_duration_without_emitting() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);
        player.start(Song::Pirates);

        // 第一个音符结束 + 停顿，进入休止符
        clock.advance(250);
        player.tick();
        clock.advance(75);
        player.tick();
        assert_eq!(player.current_index(), Some(1));
        let emits_before = player.driver().emits().len();

        for _ in 0..124 {
            clock.advance(1);
            player.tick();
            assert_eq!(player.phase(), Phase::Playing);
        }
        clock.advance(1);
        player.tick();
        assert_eq!(player.phase(), Phase::Pausing);
        assert_eq!(player.driver().emits().len(), emits_before);
    }

    #[test]
    fn tempo_multiplier_slows_the_track() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);

        player.start(Song::SquidGame);
        assert_eq!(player.driver().calls, vec![Call::Emit(262, 500)]);

        clock.advance(500);
        player.tick();
        clock.advance(150);
        player.tick();
        assert_eq!(player.driver().emits(), vec![(262, 500), (294, 250)]);
    }

    #[test]
    fn start_none_changes_nothing() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);

        player.start(Song::None);
        assert!(!player.is_playing());
        assert_eq!(player.phase(), Phase::Idle);
        assert!(player.driver().calls.is_empty());
        assert!(player.observer().events.is_empty());

        player.start(Song::Pirates);
        clock.advance(300);
        player.tick();
        let calls = player.driver().calls.clone();

        player.start(Song::None);
        assert_eq!(player.current_song(), Song::Pirates);
        assert_eq!(player.phase(), Phase::Pausing);
        assert_eq!(player.current_index(), Some(0));
        assert_eq!(player.driver().calls, calls);
        assert_eq!(player.observer().events.len(), 1);
    }

    #[test]
    fn unknown_track_is_ignored() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);

        player.start(Song::GameOfThrones);
        assert!(!player.is_playing());
        assert_eq!(player.current_song(), Song::None);
        assert!(player.driver().calls.is_empty());
    }

    #[test]
    fn disabled_player_does_not_start() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player =
            player(&clock, &flags).with_config(PlayerConfig::new().with_enabled(false));

        player.start(Song::Pirates);
        assert!(!player.is_playing());
        assert!(player.driver().calls.is_empty());
    }

    #[test]
    fn disabling_stops_playback() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);
        player.start(Song::Pirates);

        player.set_config(PlayerConfig::new().with_enabled(false));
        assert!(!player.is_playing());
        assert_eq!(player.phase(), Phase::Idle);
        assert_eq!(
            player.observer().events.last(),
            Some(&PlaybackEvent::Stopped(Song::Pirates))
        );
    }

    #[test]
    fn stop_silences_once_and_goes_idle() {
        for stop_at in [0, 100, 250, 260, 330, 500, 900] {
            let clock = ManualClock::at(0);
            let flags = PlaybackFlags::new();
            let mut player = player(&clock, &flags);
            player.start(Song::Pirates);
            for _ in 0..stop_at {
                clock.advance(1);
                player.tick();
            }

            let before = player.driver().count(Call::Silence);
            player.stop();
            player.tick();

            assert_eq!(player.phase(), Phase::Idle, "stop at {stop_at}");
            assert!(!player.is_playing());
            assert_eq!(player.driver().count(Call::Silence) - before, 1);
            assert_eq!(player.driver().calls.last(), Some(&Call::Idle));
        }
    }

    #[test]
    fn requested_stop_is_deferred_to_tick() {
        for stop_at in [0, 100, 250, 260, 330, 500, 900] {
            let clock = ManualClock::at(0);
            let flags = PlaybackFlags::new();
            let mut player = player(&clock, &flags);
            player.start(Song::Pirates);
            for _ in 0..stop_at {
                clock.advance(1);
                player.tick();
            }

            let before = player.driver().calls.len();
            flags.request_stop();
            assert!(!player.is_playing());
            assert_eq!(player.driver().calls.len(), before, "request touched the driver");

            player.tick();
            assert_eq!(player.phase(), Phase::Idle, "stop at {stop_at}");
            assert_eq!(player.current_song(), Song::None);
            assert_eq!(
                &player.driver().calls[before..],
                &[Call::Silence, Call::Idle]
            );

            player.tick();
            assert_eq!(player.driver().calls.len(), before + 2);
        }
    }

    #[test]
    fn stop_while_idle_only_resilences() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);

        player.stop();
        player.stop();
        assert_eq!(
            player.driver().calls,
            vec![Call::Silence, Call::Idle, Call::Silence, Call::Idle]
        );
        assert!(player.observer().events.is_empty());
    }

    #[test]
    fn stop_is_not_a_completion() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);

        player.start(Song::Pirates);
        clock.advance(10);
        player.tick();
        flags.request_stop();
        player.tick();

        for _ in 0..2_000 {
            clock.advance(1);
            player.tick();
        }

        assert_eq!(
            player.observer().events,
            vec![
                PlaybackEvent::Started(Song::Pirates),
                PlaybackEvent::Stopped(Song::Pirates)
            ]
        );
    }

    #[test]
    fn restart_discards_the_previous_song() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);

        player.start(Song::Pirates);
        clock.advance(250);
        player.tick();
        clock.advance(75);
        player.tick();
        assert_eq!(player.current_index(), Some(1));

        player.start(Song::SquidGame);
        assert_eq!(player.current_song(), Song::SquidGame);
        assert_eq!(player.current_index(), Some(0));
        assert_eq!(player.phase(), Phase::Playing);
        assert_eq!(player.driver().calls.last(), Some(&Call::Emit(262, 500)));

        let mut visited = vec![0];
        for _ in 0..2_000 {
            clock.advance(1);
            player.tick();
            if let Some(index) = player.current_index() {
                if visited.last() != Some(&index) {
                    visited.push(index);
                }
            }
        }
        assert_eq!(visited, vec![0, 1]);
        assert_eq!(
            player.observer().events,
            vec![
                PlaybackEvent::Started(Song::Pirates),
                PlaybackEvent::Started(Song::SquidGame),
                PlaybackEvent::Completed(Song::SquidGame)
            ]
        );
    }

    #[test]
    fn start_after_requested_stop_wins() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);

        player.start(Song::Pirates);
        flags.request_stop();
        player.start(Song::SquidGame);
        player.tick();

        assert!(player.is_playing());
        assert_eq!(player.current_song(), Song::SquidGame);
    }

    #[test]
    fn survives_clock_wraparound() {
        let clock = ManualClock::at(u32::MAX - 100);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);
        player.start(Song::Pirates);

        clock.advance(249);
        player.tick();
        assert_eq!(player.phase(), Phase::Playing);

        clock.advance(1);
        player.tick();
        assert_eq!(player.phase(), Phase::Pausing);

        clock.advance(75);
        player.tick();
        assert_eq!(player.current_index(), Some(1));
    }

    #[test]
    fn driver_errors_do_not_stall_playback() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = MelodyPlayer::new(BrokenBuzzer::default(), &clock, TestSongs, &flags);

        player.start(Song::Pirates);
        for _ in 0..2_000 {
            clock.advance(1);
            player.tick();
        }

        assert!(!player.is_playing());
        assert!(player.driver().attempts > 0);
    }

    #[test]
    fn commands_dispatch_to_start_and_stop() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let mut player = player(&clock, &flags);

        player.apply(PlayCommand::Play(Song::SquidGame));
        assert_eq!(player.current_song(), Song::SquidGame);

        player.apply(PlayCommand::Stop);
        assert!(!player.is_playing());
        assert_eq!(
            player.observer().events,
            vec![
                PlaybackEvent::Started(Song::SquidGame),
                PlaybackEvent::Stopped(Song::SquidGame)
            ]
        );
    }

    #[test]
    fn custom_pause_ratio() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        let config = PlayerConfig::new().with_pause_permille(500).unwrap();
        let mut player = player(&clock, &flags).with_config(config);

        player.start(Song::Pirates);
        clock.advance(250);
        player.tick();
        clock.advance(124);
        player.tick();
        assert_eq!(player.current_index(), Some(0));
        clock.advance(1);
        player.tick();
        assert_eq!(player.current_index(), Some(1));
    }

    #[test]
    fn full_length_pause_ends_with_the_note_length() {
        let clock = ManualClock::at(0);
        let flags = PlaybackFlags::new();
        assert_eq!(
            PlayerConfig::new().with_pause_permille(5000),
            Err(MelodyError::InvalidConfig)
        );
        let config = PlayerConfig::new().with_pause_permille(1000).unwrap();
        let mut player = player(&clock, &flags).with_config(config);

        player.start(Song::Pirates);
        clock.advance(250);
        player.tick();
        assert_eq!(player.phase(), Phase::Pausing);
        clock.advance(249);
        player.tick();
        assert_eq!(player.current_index(), Some(0));
        clock.advance(1);
        player.tick();
        assert_eq!(player.current_index(), Some(1));
    }

    /// 按 1ms 步进播放每一首内置曲目: 所有音符按顺序各访问一次，
    /// 并且恰好在所有音符与停顿时长之和处结束。
    #[test]
    fn builtin_songs_finish_exactly_on_schedule() {
        for song in Song::ALL {
            let track = BuiltinSongs.track(song).unwrap();
            let expected = track.duration_ms(DEFAULT_PAUSE_PERMILLE);

            let clock = ManualClock::at(7);
            let flags = PlaybackFlags::new();
            let mut player = MelodyPlayer::with_observer(
                MockBuzzer::default(),
                &clock,
                BuiltinSongs,
                &flags,
                Recorder::default(),
            );
            player.start(song);

            let mut visited = vec![0];
            let mut elapsed = 0;
            while player.is_playing() {
                clock.advance(1);
                elapsed += 1;
                player.tick();
                if let Some(index) = player.current_index() {
                    if visited.last() != Some(&index) {
                        visited.push(index);
                    }
                }
                assert!(elapsed <= expected, "{:?} overran", song);
            }

            assert_eq!(elapsed, expected, "{:?}", song);
            assert_eq!(visited, (0..track.len()).collect::<Vec<_>>());

            let sounding = track.notes().iter().filter(|n| !n.pitch.is_rest()).count();
            assert_eq!(player.driver().emits().len(), sounding);
            assert_eq!(
                player.observer().events,
                vec![PlaybackEvent::Started(song), PlaybackEvent::Completed(song)]
            );
        }
    }
}
