//! Read-only view wrappers over domain entities.

pub mod user_presenter;

pub use user_presenter::UserPresenter;

/// Implemented by entities that expose a presenter.
///
/// A presenter is a borrowing, read-only view; the entity it was created
/// from stays accessible through the presenter's accessor and is always the
/// same instance, never a copy.
pub trait Presentable {
    type Presenter<'a>
    where
        Self: 'a;

    fn presenter(&self) -> Self::Presenter<'_>;
}
