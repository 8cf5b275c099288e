//! The `value!` literal macro.

/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// `null`, `[..]` and `{..}` nest freely; anything else is an expression
/// converted with `Value::from`. Object keys are string literals or
/// parenthesized expressions. A key given twice keeps the last value.
///
/// ```
/// use dynval::{Value, value};
///
/// let name = "dynval";
/// let doc = value!({
///     "name": name,
///     "tags": ["cell", null, 3],
///     "nested": {"depth": 2},
///     ("computed".to_uppercase()): -1
/// });
///
/// assert_eq!(doc["name"], Value::from("dynval"));
/// assert!(doc["tags"][1].is_null());
/// assert_eq!(doc["nested"]["depth"].cast::<u8>().unwrap(), 2);
/// assert_eq!(doc["COMPUTED"].cast::<i64>().unwrap(), -1);
/// ```
#[macro_export]
macro_rules! value {
    // === arrays ===

    (@array [$($elems:expr,)*]) => {{
        let mut array = $crate::VArray::new();
        $(array.push($elems);)*
        array.into_value()
    }};
    (@array [$($elems:expr),*]) => {
        $crate::value!(@array [$($elems,)*])
    };
    (@array [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::value!(@array [$($elems,)* $crate::value!(null)] $($rest)*)
    };
    (@array [$($elems:expr,)*] [$($array:tt)*] $($rest:tt)*) => {
        $crate::value!(@array [$($elems,)* $crate::value!([$($array)*])] $($rest)*)
    };
    (@array [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        $crate::value!(@array [$($elems,)* $crate::value!({$($map)*})] $($rest)*)
    };
    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::value!(@array [$($elems,)* $crate::value!($next),] $($rest)*)
    };
    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::value!(@array [$($elems,)* $crate::value!($last)])
    };
    (@array [$($elems:expr),*] , $($rest:tt)*) => {
        $crate::value!(@array [$($elems,)*] $($rest)*)
    };

    // === objects ===

    (@object $obj:ident () ()) => {};
    (@object $obj:ident () ($key:literal : $($rest:tt)*)) => {
        $crate::value!(@object $obj ($key) (: $($rest)*));
    };
    (@object $obj:ident () (($key:expr) : $($rest:tt)*)) => {
        $crate::value!(@object $obj ($key) (: $($rest)*));
    };
    (@object $obj:ident [$key:expr] ($value:expr) , $($rest:tt)*) => {
        let _ = $obj.insert($key, $value);
        $crate::value!(@object $obj () ($($rest)*));
    };
    (@object $obj:ident [$key:expr] ($value:expr)) => {
        let _ = $obj.insert($key, $value);
    };
    (@object $obj:ident ($key:expr) (: null $($rest:tt)*)) => {
        $crate::value!(@object $obj [$key] ($crate::value!(null)) $($rest)*);
    };
    (@object $obj:ident ($key:expr) (: [$($array:tt)*] $($rest:tt)*)) => {
        $crate::value!(@object $obj [$key] ($crate::value!([$($array)*])) $($rest)*);
    };
    (@object $obj:ident ($key:expr) (: {$($map:tt)*} $($rest:tt)*)) => {
        $crate::value!(@object $obj [$key] ($crate::value!({$($map)*})) $($rest)*);
    };
    (@object $obj:ident ($key:expr) (: $value:expr , $($rest:tt)*)) => {
        $crate::value!(@object $obj [$key] ($crate::value!($value)) , $($rest)*);
    };
    (@object $obj:ident ($key:expr) (: $value:expr)) => {
        $crate::value!(@object $obj [$key] ($crate::value!($value)));
    };

    // === entry points ===

    (null) => {
        $crate::Value::NULL
    };
    ([]) => {
        $crate::VArray::new().into_value()
    };
    ([ $($tt:tt)+ ]) => {
        $crate::value!(@array [] $($tt)+)
    };
    ({}) => {
        $crate::VObject::new().into_value()
    };
    ({ $($tt:tt)+ }) => {{
        let mut object = $crate::VObject::new();
        $crate::value!(@object object () ($($tt)+));
        object.into_value()
    }};
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
