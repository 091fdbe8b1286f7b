//! User orchestrator: the only component with business rules.
//!
//! Composes the validator, the error taxonomy, and the storage port. The
//! service is stateless after construction and is shared by reference
//! across concurrent request handlers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::ports::{UserRepository, UserRepositoryError};
use super::validation::Validator;
use super::{Error, User};

/// Driving port consumed by inbound adapters.
#[async_trait]
pub trait UserOperations: Send + Sync {
    /// All users, in the order the storage port guarantees (ascending id).
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Validate and create a user, enforcing email uniqueness.
    async fn create_user(&self, name: &str, email: &str) -> Result<User, Error>;
}

/// Orchestrates user listing and creation over the storage port.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    validator: Validator,
}

impl UserService {
    /// Build a service over the given repository and validator.
    pub fn new(repository: Arc<dyn UserRepository>, validator: Validator) -> Self {
        Self {
            repository,
            validator,
        }
    }
}

#[async_trait]
impl UserOperations for UserService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(|error| Error::internal("failed to retrieve users").with_source(error))
    }

    async fn create_user(&self, name: &str, email: &str) -> Result<User, Error> {
        if let Err(errors) = self.validator.validate_create_user_request(name, email) {
            debug!(%errors, "user creation rejected by validation");
            return Err(Error::validation(errors));
        }

        let exists = self
            .repository
            .email_exists(email)
            .await
            .map_err(|error| Error::internal("failed to check email existence").with_source(error))?;
        if exists {
            return Err(Error::conflict("user with this email already exists"));
        }

        // The existence pre-check races with concurrent creations; the
        // store's unique index is the authoritative guard, so its rejection
        // maps to the same conflict the pre-check would have produced.
        match self.repository.insert(name, email).await {
            Ok(user) => Ok(user),
            Err(UserRepositoryError::UniqueViolation { .. }) => {
                Err(Error::conflict("user with this email already exists"))
            }
            Err(error) => Err(Error::internal("failed to create user").with_source(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rstest::rstest;

    use super::*;
    use crate::domain::{ErrorCode, ValidationPolicy};

    #[derive(Clone, Copy)]
    enum StubFailure {
        Connection,
        Query,
        UniqueViolation,
    }

    impl StubFailure {
        fn to_error(self) -> UserRepositoryError {
            match self {
                Self::Connection => UserRepositoryError::connection("database unavailable"),
                Self::Query => UserRepositoryError::query("database query failed"),
                Self::UniqueViolation => {
                    UserRepositoryError::unique_violation("duplicate key value")
                }
            }
        }
    }

    #[derive(Default)]
    struct StubState {
        users: Vec<User>,
        list_failure: Option<StubFailure>,
        exists_failure: Option<StubFailure>,
        insert_failure: Option<StubFailure>,
        insert_calls: usize,
        exists_calls: usize,
    }

    #[derive(Default)]
    struct StubUserRepository {
        state: Mutex<StubState>,
    }

    impl StubUserRepository {
        fn with_users(users: Vec<User>) -> Self {
            Self {
                state: Mutex::new(StubState {
                    users,
                    ..StubState::default()
                }),
            }
        }

        fn insert_calls(&self) -> usize {
            self.state.lock().expect("state lock").insert_calls
        }

        fn exists_calls(&self) -> usize {
            self.state.lock().expect("state lock").exists_calls
        }

        fn set_list_failure(&self, failure: StubFailure) {
            self.state.lock().expect("state lock").list_failure = Some(failure);
        }

        fn set_exists_failure(&self, failure: StubFailure) {
            self.state.lock().expect("state lock").exists_failure = Some(failure);
        }

        fn set_insert_failure(&self, failure: StubFailure) {
            self.state.lock().expect("state lock").insert_failure = Some(failure);
        }
    }

    #[async_trait]
    impl UserRepository for StubUserRepository {
        async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
            let state = self.state.lock().expect("state lock");
            if let Some(failure) = state.list_failure {
                return Err(failure.to_error());
            }
            Ok(state.users.clone())
        }

        async fn insert(&self, name: &str, email: &str) -> Result<User, UserRepositoryError> {
            let mut state = self.state.lock().expect("state lock");
            state.insert_calls += 1;
            if let Some(failure) = state.insert_failure {
                return Err(failure.to_error());
            }
            let id = i32::try_from(state.users.len()).expect("small fixture") + 1;
            let user = User::new(id, name, email);
            state.users.push(user.clone());
            Ok(user)
        }

        async fn email_exists(&self, email: &str) -> Result<bool, UserRepositoryError> {
            let mut state = self.state.lock().expect("state lock");
            state.exists_calls += 1;
            if let Some(failure) = state.exists_failure {
                return Err(failure.to_error());
            }
            let needle = email.to_lowercase();
            Ok(state
                .users
                .iter()
                .any(|user| user.email.to_lowercase() == needle))
        }
    }

    fn service(repository: Arc<StubUserRepository>) -> UserService {
        let validator = Validator::new(&ValidationPolicy::default()).expect("policy compiles");
        UserService::new(repository, validator)
    }

    #[tokio::test]
    async fn list_users_returns_repository_order() {
        let users = vec![
            User::new(1, "Ada", "ada@example.com"),
            User::new(2, "Grace", "grace@example.com"),
        ];
        let repository = Arc::new(StubUserRepository::with_users(users.clone()));

        let listed = service(repository).list_users().await.expect("list ok");

        assert_eq!(listed, users);
    }

    #[tokio::test]
    async fn list_users_wraps_storage_failure_as_internal() {
        let repository = Arc::new(StubUserRepository::default());
        repository.set_list_failure(StubFailure::Connection);

        let error = service(repository)
            .list_users()
            .await
            .expect_err("failure classified");

        assert_eq!(error.code(), ErrorCode::Internal);
        assert_eq!(error.message(), "failed to retrieve users");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[tokio::test]
    async fn create_user_assigns_id_on_success() {
        let repository = Arc::new(StubUserRepository::default());

        let user = service(Arc::clone(&repository))
            .create_user("Ada", "ada@example.com")
            .await
            .expect("creation succeeds");

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn invalid_input_skips_storage_entirely() {
        let repository = Arc::new(StubUserRepository::default());

        let error = service(Arc::clone(&repository))
            .create_user("", "not-an-email")
            .await
            .expect_err("validation fails");

        assert_eq!(error.code(), ErrorCode::BadRequest);
        let violations = error.validation_errors().expect("field-level violations");
        assert_eq!(violations.count(), 2);
        assert_eq!(violations.as_slice()[0].field, "name");
        assert_eq!(violations.as_slice()[1].field, "email");
        assert_eq!(repository.exists_calls(), 0);
        assert_eq!(repository.insert_calls(), 0);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict_without_insert() {
        let repository = Arc::new(StubUserRepository::with_users(vec![User::new(
            1,
            "Ada",
            "ada@example.com",
        )]));

        let error = service(Arc::clone(&repository))
            .create_user("Grace", "ada@example.com")
            .await
            .expect_err("duplicate rejected");

        assert_eq!(error.code(), ErrorCode::Conflict);
        assert_eq!(error.message(), "user with this email already exists");
        assert_eq!(repository.insert_calls(), 0);
    }

    #[tokio::test]
    async fn duplicate_detection_is_case_insensitive() {
        let repository = Arc::new(StubUserRepository::with_users(vec![User::new(
            1,
            "Ada",
            "a@x.com",
        )]));

        let error = service(repository)
            .create_user("Bob", "A@X.com")
            .await
            .expect_err("duplicate rejected");

        assert_eq!(error.code(), ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn store_level_unique_violation_maps_to_conflict() {
        // Models the pre-check race: nothing exists yet, but the insert
        // collides with a concurrent creation at the unique index.
        let repository = Arc::new(StubUserRepository::default());
        repository.set_insert_failure(StubFailure::UniqueViolation);

        let error = service(repository)
            .create_user("Ada", "ada@example.com")
            .await
            .expect_err("insert rejected");

        assert_eq!(error.code(), ErrorCode::Conflict);
        assert_eq!(error.message(), "user with this email already exists");
    }

    #[rstest]
    #[case(StubFailure::Connection)]
    #[case(StubFailure::Query)]
    #[tokio::test]
    async fn existence_check_failure_is_internal(#[case] failure: StubFailure) {
        let repository = Arc::new(StubUserRepository::default());
        repository.set_exists_failure(failure);

        let error = service(Arc::clone(&repository))
            .create_user("Ada", "ada@example.com")
            .await
            .expect_err("failure classified");

        assert_eq!(error.code(), ErrorCode::Internal);
        assert_eq!(error.message(), "failed to check email existence");
        assert_eq!(repository.insert_calls(), 0);
    }

    #[rstest]
    #[case(StubFailure::Connection)]
    #[case(StubFailure::Query)]
    #[tokio::test]
    async fn non_constraint_insert_failure_is_internal(#[case] failure: StubFailure) {
        let repository = Arc::new(StubUserRepository::default());
        repository.set_insert_failure(failure);

        let error = service(repository)
            .create_user("Ada", "ada@example.com")
            .await
            .expect_err("failure classified");

        assert_eq!(error.code(), ErrorCode::Internal);
        assert_eq!(error.message(), "failed to create user");
        assert!(std::error::Error::source(&error).is_some());
    }
}
