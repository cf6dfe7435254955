//! Macros for ergonomic attribute maps.

/// Build an [`AttrMap`](crate::core::AttrMap) from `name => value` pairs.
///
/// Values go through `AttrValue::from`, so numbers, strings and booleans can
/// be written directly.
///
/// # Example
///
/// ```
/// use stateful::attrs;
///
/// let attrs = attrs! {
///     "height" => 100,
///     "fill" => "#0af",
///     "opacity" => 0.5,
/// };
///
/// assert_eq!(attrs.len(), 3);
/// assert_eq!(attrs["fill"], "#0af");
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::core::AttrMap::new()
    };
    (
        $($name:expr => $value:expr),+ $(,)?
    ) => {{
        let mut map = $crate::core::AttrMap::new();
        $(
            map.insert(
                ::std::string::String::from($name),
                $crate::core::AttrValue::from($value),
            );
        )+
        map
    }};
}
