/// Define a configuration struct with embedded defaults
///
/// Each field is declared once as `name: Type = default`. The macro expands to:
/// - the struct with public fields and serde derives (`#[serde(default)]`, so
///   partial TOML files fill in the rest)
/// - a `Default` implementation using the declared values
/// - `FIELDS`, the list of accepted keys, used to warn about typos in config files
///
/// # Example
/// ```
/// mirrorscope::config_struct! {
///     pub struct ExampleConfig {
///         port: u16 = 5000,
///         host: String = "127.0.0.1".to_string(),
///     }
/// }
///
/// assert_eq!(ExampleConfig::default().port, 5000);
/// assert_eq!(ExampleConfig::FIELDS, &["port", "host"]);
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl $name {
            /// Keys accepted in the TOML table for this struct
            pub const FIELDS: &'static [&'static str] = &[$(stringify!($field_name)),*];
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
