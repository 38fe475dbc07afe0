/// Record that can be offered in a selector.
///
/// Identity is `id_key()`, never object identity: two values with the same
/// key are the same entity for selection purposes.
pub trait SelectableEntity {
    /// String-normalized id used for every lookup.
    fn id_key(&self) -> String;

    /// Label shown to the user.
    fn display_name(&self) -> String;
}
