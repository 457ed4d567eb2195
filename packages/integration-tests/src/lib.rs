//! Cross-module tests of the `juiced` crate live in `tests/`.
