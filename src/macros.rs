/// Builds a [`Document`](crate::Document) from a literal description.
///
/// Keys with a `[locale]` suffix become locale variants. Values can be any
/// `Display` expression and are escaped as plain text.
///
/// ```rust
/// use desktop_file::{desktop, Locale};
///
/// let doc = desktop!({
///     "Desktop Entry": {
///         "Type": "Application",
///         "Name": "Files",
///         "Name[de]": "Dateien",
///         "Terminal": false,
///     },
/// });
///
/// let group = doc.get_group("Desktop Entry");
/// assert!(!group.get_entry("Terminal").value().as_bool());
/// assert_eq!(
///     group.get_entry("Name").value_at_locale(&Locale::parse("de")).as_raw(),
///     "Dateien"
/// );
/// ```
#[macro_export]
macro_rules! desktop {
    ({}) => {
        $crate::Document::new()
    };

    ({ $($group:literal : { $($key:literal : $value:expr),* $(,)? }),* $(,)? }) => {{
        let mut document = $crate::Document::new();
        $(
            #[allow(unused_variables)]
            let group = document.add_group($group);
            $(
                group.insert(
                    $key,
                    $crate::Value::from_text(&::std::string::ToString::to_string(&$value)),
                );
            )*
        )*
        document
    }};
}
