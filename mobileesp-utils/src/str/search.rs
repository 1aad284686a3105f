/// Finds the first occurrence of `sub` within `s`.
///
/// The returned index is a byte offset into `s`.
/// If `sub` is empty, this returns `Some(0)`.
///
/// Comparison is byte-exact, callers are expected to
/// case-fold both sides up front when they want to match case insensitive.
pub fn contains<T1, T2>(s: T1, sub: T2) -> Option<usize>
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    memchr::memmem::find(s.as_ref(), sub.as_ref())
}

/// Returns `true` if `sub` occurs within `s`.
///
/// This is a convenience wrapper around [`contains`].
pub fn submatch<T1, T2>(s: T1, sub: T2) -> bool
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    contains(s, sub).is_some()
}

/// Returns `true` if any item produced by `sub_iter` occurs within `s`.
///
/// Iteration order does not matter for the result, only for the amount of work performed.
/// Returns `false` for an empty `sub_iter`.
pub fn submatch_any<T, I>(s: T, sub_iter: I) -> bool
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item: AsRef<[u8]>>,
{
    let haystack = s.as_ref();
    sub_iter.into_iter().any(|sub| submatch(haystack, sub))
}

/// Returns `true` if every item produced by `sub_iter` occurs within `s`.
///
/// Iteration order does not matter for the result, only for the amount of work performed.
/// Returns `true` for an empty `sub_iter`.
pub fn submatch_all<T, I>(s: T, sub_iter: I) -> bool
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item: AsRef<[u8]>>,
{
    let haystack = s.as_ref();
    sub_iter.into_iter().all(|sub| submatch(haystack, sub))
}
