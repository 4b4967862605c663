//! Helpers for generating the mirrored left/right halves of an operation.

/// Expands one direction-parameterised method into a `_left` and a `_right`
/// public method.
///
/// ```ignore
/// mirrored! {
///     /// Rotate around `x`.
///     pub fn rotate(&mut self, x: NodeId) => rotate_dir;
/// }
/// ```
///
/// generates `rotate_left(x)` calling `self.rotate_dir(Direction::Left, x)`
/// and `rotate_right(x)` calling `self.rotate_dir(Direction::Right, x)`.
macro_rules! mirrored {
    (
        $(#[$attr:meta])*
        pub fn $prefix:ident(&mut self $(, $arg:ident: $ty:ty)*) $(-> $ret:ty)? => $target:ident;
    ) => {
        paste::paste! {
            $(#[$attr])*
            #[doc = ""]
            #[doc = "Left-hand variant."]
            pub fn [<$prefix _left>](&mut self $(, $arg: $ty)*) $(-> $ret)? {
                self.$target($crate::types::Direction::Left $(, $arg)*)
            }

            $(#[$attr])*
            #[doc = ""]
            #[doc = "Right-hand variant."]
            pub fn [<$prefix _right>](&mut self $(, $arg: $ty)*) $(-> $ret)? {
                self.$target($crate::types::Direction::Right $(, $arg)*)
            }
        }
    };
}
