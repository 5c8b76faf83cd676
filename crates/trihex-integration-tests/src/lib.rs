//! Cross-crate scenario tests for the Trihex engine live in `tests/`.
