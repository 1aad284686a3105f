//! Macros used throughout the mobileesp crates.

#[doc(hidden)]
#[macro_export]
/// Match a string against literal cases, ignoring ASCII case
/// and surrounding whitespace of the matched value.
///
/// Arms are tried top to bottom, a fallback arm (`_ => ...`) is required
/// and must come last.
macro_rules! __match_ignore_ascii_case_str {
    (match ($s:expr) { $($arms:tt)* }) => {{
        let value: &str = ($s).trim();
        $crate::__match_ignore_ascii_case_str!(@arms value; $($arms)*)
    }};
    (@arms $value:ident; _ => $fallback:expr $(,)?) => {
        $fallback
    };
    (@arms $value:ident; $($case:literal)|+ => $ret:expr, $($rest:tt)*) => {
        if [$($case),+].iter().any(|case| $value.eq_ignore_ascii_case(case)) {
            $ret
        } else {
            $crate::__match_ignore_ascii_case_str!(@arms $value; $($rest)*)
        }
    };
}
#[doc(inline)]
pub use crate::__match_ignore_ascii_case_str as match_ignore_ascii_case_str;
