// flags.rs - Compile flags handed to the matching engine.

use bitflags::bitflags;

bitflags! {
    /// Options the engine should compile a pattern with.
    ///
    /// Stop-at-first is not a compile option; it is a hint about which
    /// match operation to call and is exposed separately by
    /// [`VerbalExpression::stops_at_first`](crate::VerbalExpression::stops_at_first).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CompileFlags: u8 {
        /// Letters match regardless of case.
        const CASE_INSENSITIVE = 1;
        /// `.` also matches `\n`; `^`/`$` only match at the ends of the subject.
        const SINGLE_LINE = 1 << 1;
    }
}
