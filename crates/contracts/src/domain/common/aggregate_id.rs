/// Трейт для типов идентификаторов агрегатов
///
/// The backend hands out integer ids, the browser compares them as strings
/// (dropdown keys, requested ids). Entity keys and requested ids are both
/// produced here, so they always compare equal for the same id.
pub trait AggregateId {
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }
}
