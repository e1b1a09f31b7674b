//! Typed domain separators for canonical hashing.
//!
//! Every hash computed in the workspace selects a domain via [`HashDomain`].
//! Adding a domain is a single change here: the enum, `as_bytes()`, `ALL`,
//! and `Display` are generated from the same macro invocation.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string that is
        /// fed to SHA-256 ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Expansion trace of one search call.
    SearchTrace => b"WAYFIND::SEARCH_TRACE::V1\0",

    /// Solution path (rendered state labels, start to goal).
    SolutionPath => b"WAYFIND::SOLUTION_PATH::V1\0",

    // -----------------------------------------------------------------------
    // Harness
    // -----------------------------------------------------------------------

    /// Full run report produced by the harness runner.
    RunReport => b"WAYFIND::RUN_REPORT::V1\0",

    /// World fixture content (maze grid, puzzle board).
    WorldFixture => b"WAYFIND::WORLD_FIXTURE::V1\0",

    // -----------------------------------------------------------------------
    // Benchmarks
    // -----------------------------------------------------------------------

    /// Benchmark determinism guard.
    BenchGuard => b"WAYFIND::BENCH_GUARD::V1\0",
}
