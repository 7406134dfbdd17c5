use super::*;

/// Tests registering a new account.
///
/// Expected: Ok with a regular user
#[tokio::test]
async fn registers_regular_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hasher = PasswordHasher::default();

    let user = AuthService::new(db, &hasher)
        .register(registration("malee@example.com", "hunter22"))
        .await
        .unwrap();

    assert_eq!(user.email, "malee@example.com");
    assert!(!user.is_admin());

    Ok(())
}

/// Tests registering an email twice.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn duplicate_email_is_validation_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hasher = PasswordHasher::default();
    let service = AuthService::new(db, &hasher);

    service
        .register(registration("twice@example.com", "hunter22"))
        .await
        .unwrap();
    let result = service
        .register(registration("twice@example.com", "hunter22"))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests the minimum password length.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn short_password_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hasher = PasswordHasher::default();

    let result = AuthService::new(db, &hasher)
        .register(registration("short@example.com", "12345"))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
