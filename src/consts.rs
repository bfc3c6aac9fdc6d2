pub mod deck_consts {
    //! Deck Configuration Constants
    //!
    //! Default timings and limits for the deck. Every timing here can be
    //! overridden from the config file; these are the values used when it is
    //! absent.

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // TIMING
    // =============================================================================

    /// Timing defaults, all in milliseconds of scheduler time
    pub mod timing {
        use std::time::Duration;

        /// Interval between two jitter ticks of a live metric loop
        pub const TICK_INTERVAL_MS: u64 = 2_000;

        /// How long a "Run Live Analysis" stays in the processing state
        pub const ANALYSIS_DURATION_MS: u64 = 3_000;

        /// Interval between two phases of the technology demo player
        pub const PHASE_INTERVAL_MS: u64 = 2_000;

        /// Length of the enter/exit transition when switching sections
        pub const TRANSITION_MS: u64 = 500;

        /// How long the splash screen is shown before the deck
        pub const SPLASH_DURATION_MS: u64 = 2_000;

        /// Input poll timeout of the TUI loop
        pub const INPUT_POLL_MS: u64 = 100;

        pub const fn input_poll() -> Duration {
            Duration::from_millis(INPUT_POLL_MS)
        }
    }

    // =============================================================================
    // CONFIG FILE
    // =============================================================================

    /// Directory under $HOME holding the config file
    pub const CONFIG_DIR: &str = ".tumortarget";

    /// Config file name inside [`CONFIG_DIR`]
    pub const CONFIG_FILE: &str = "config.json";
}
