use crate::domain::DomainResult;

/// Transactional boundary around one or more repository writes
pub trait UnitOfWork {
    /// Make every staged write durable
    fn commit(&mut self) -> DomainResult<()>;

    /// Discard every staged write
    fn rollback(&mut self) -> DomainResult<()>;
}
