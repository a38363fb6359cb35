mod structures;

use proc_macro::TokenStream;
use quote::quote;
use structures::ErrorKindTarget;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use algex_attrs::ErrorKind;
/// use algex_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("cannot divide by `{}`", divisor),
///     labels = ["this divisor"],
///     help = "pick a non-zero divisor",
/// )]
/// pub struct Foo {
///     divisor: i64,
/// }
///
/// let foo = Foo { divisor: 0 };
/// assert_eq!(foo.message(), "cannot divide by `0`");
/// assert_eq!(foo.help().as_deref(), Some("pick a non-zero divisor"));
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                    |
/// | --------- | ------------------------------------------------------------------------------ |
/// | `message` | The message displayed at the top of the error when it is displayed.            |
/// | `labels`  | An array of label texts, pointing at the error's spans in order.               |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it.   |
///
/// Each tag accepts an expression that should evaluate to a [`String`] or `&str` (`labels` takes
/// an array of them). For structs with named fields, the expression is evaluated with the members
/// of the struct in scope, so they can be used in the expression (tuple structs are not
/// supported).
///
/// The trait must be in scope where the macro is used.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
