//! Every tunable of the tracker lives here. Nothing is read from disk or the
//! environment.

pub mod window {
    pub const TITLE: &str = "PAWScoin Tracker";
    pub const INNER_SIZE: [f32; 2] = [600.0, 900.0];
    pub const MIN_INNER_SIZE: [f32; 2] = [480.0, 600.0];
}

pub mod timer {
    use std::time::Duration;

    /// Seconds shown on the countdown before each price refresh.
    pub const COUNTDOWN_SECS: u32 = 12;
    pub const TICK: Duration = Duration::from_secs(1);
}

pub mod simulation {
    /// Samples drawn per histogram refresh.
    pub const SAMPLE_COUNT: usize = 100_000;
    /// Samples handled by one rayon task.
    pub const CHUNK_SIZE: usize = 10_000;
    pub const MAX_PRICE: u8 = 99;
}

pub mod chart {
    pub const HISTORY_HEIGHT: f32 = 300.0;
    pub const HISTOGRAM_HEIGHT: f32 = 220.0;
    pub const HISTORY_MIN_X: f64 = 10.0;
    pub const HISTORY_MAX_Y: f64 = 100.0;
    /// Pointer distance (screen points) at which a marker counts as hit.
    pub const PICK_RADIUS: f32 = 6.0;
    pub const MARKER_RADIUS: f32 = 4.0;
    pub const HISTOGRAM_HEADROOM: f64 = 5.0;
}

pub mod text {
    pub const HISTORY_TITLE: &str = "История цен PAWScoin";
    pub const HISTORY_Y_LABEL: &str = "Цена";
    pub const HISTORY_X_LABEL: &str = "Обновления";
    pub const HISTOGRAM_TITLE: &str = "Шансы на следующее значение";
    pub const HISTOGRAM_Y_LABEL: &str = "% вероятности";
    pub const COPY_BUTTON: &str = "📋 Копировать текущую цену";
    pub const EXIT_BUTTON: &str = "❌ Завершить программу";
    pub const TIME_FORMAT: &str = "%H:%M:%S";
}
