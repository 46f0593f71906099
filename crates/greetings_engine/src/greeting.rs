/// Formats the greeting for `name`.
///
/// The name is embedded verbatim, so the result always contains it as a
/// contiguous substring. Empty and whitespace-only names are accepted.
///
/// ```
/// use greetings_engine::hello;
///
/// assert_eq!(hello("Gladys"), "Hi, Gladys! Welcome!");
/// ```
pub fn hello(name: &str) -> String {
    format!("Hi, {name}! Welcome!")
}
