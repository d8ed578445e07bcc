use anyhow::Result;
use chrono::NaiveDate;

use super::scratch_db;
use crate::{task, user_v1, user_v2, ResourceKind, Task, UserV1, UserV2};

fn task_input(title: &str, done: bool) -> task::Input {
    task::Input { title: title.into(), description: "2 liters".into(), done }
}

/// Test task CRUD operations
#[tokio::test]
async fn test_task_crud() -> Result<()> {
    let db = scratch_db::<Task>().await?;

    // Create
    let created = task::create(&db, task_input("Buy milk", false)).await?;
    assert_eq!(created, Task::assemble(created.id, task_input("Buy milk", false)));

    // Read
    let found = task::get(&db, created.id).await?.expect("task stored");
    assert_eq!(found, created);

    // Replace keeps the id
    let replaced = task::replace(&db, created.id, task_input("Buy bread", true)).await?.expect("row exists");
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.title, "Buy bread");
    assert!(replaced.done);
    assert_eq!(task::get(&db, created.id).await?, Some(replaced));

    // Delete reports whether anything went away
    assert!(task::delete(&db, created.id).await?);
    assert!(!task::delete(&db, created.id).await?);
    assert!(task::get(&db, created.id).await?.is_none());
    Ok(())
}

/// Replace on a missing id touches nothing
#[tokio::test]
async fn test_replace_missing_row() -> Result<()> {
    let db = scratch_db::<Task>().await?;
    assert!(task::replace(&db, 42, task_input("ghost", false)).await?.is_none());
    assert!(task::list(&db).await?.is_empty());
    Ok(())
}

/// Ids are distinct, increasing, and never handed out again after a delete
#[tokio::test]
async fn test_ids_are_monotonic() -> Result<()> {
    let db = scratch_db::<Task>().await?;
    let a = task::create(&db, task_input("a", false)).await?;
    let b = task::create(&db, task_input("b", false)).await?;
    assert!(b.id > a.id);

    task::delete(&db, b.id).await?;
    let c = task::create(&db, task_input("c", false)).await?;
    assert!(c.id > b.id);

    let ids: Vec<i32> = task::list(&db).await?.into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
    Ok(())
}

/// Test account-style user CRUD operations
#[tokio::test]
async fn test_user_v1_crud() -> Result<()> {
    let db = scratch_db::<UserV1>().await?;
    let input = user_v1::Input { username: "ivan".into(), email: "ivan@example.com".into(), password: "secret".into() };

    let created = user_v1::create(&db, input.clone()).await?;
    // duplicate emails are accepted
    let twin = user_v1::create(&db, input.clone()).await?;
    assert_ne!(created.id, twin.id);

    let all = user_v1::list(&db).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], UserV1::assemble(created.id, input));

    let changed = user_v1::Input { username: "petr".into(), email: "petr@example.com".into(), password: "hunter2".into() };
    let updated = user_v1::replace(&db, created.id, changed.clone()).await?.expect("row exists");
    assert_eq!(updated, UserV1::assemble(created.id, changed));

    assert!(user_v1::delete(&db, created.id).await?);
    assert_eq!(user_v1::list(&db).await?, vec![twin]);
    Ok(())
}

/// Test profile-style user CRUD operations, including the date column
#[tokio::test]
async fn test_user_v2_crud() -> Result<()> {
    let db = scratch_db::<UserV2>().await?;
    let input = user_v2::Input {
        first_name: "Anna".into(),
        last_name: "Petrova".into(),
        birthday: NaiveDate::from_ymd_opt(1990, 5, 17).expect("date"),
        email: "anna@example.com".into(),
        address: "Moscow, Tverskaya 1".into(),
    };

    let created = <UserV2 as ResourceKind>::create(&db, input.clone()).await?;
    let fetched = <UserV2 as ResourceKind>::get(&db, created.id).await?.expect("stored");
    assert_eq!(fetched.birthday, input.birthday);
    assert_eq!(fetched, UserV2::assemble(created.id, input));

    assert!(<UserV2 as ResourceKind>::delete(&db, created.id).await?);
    assert!(<UserV2 as ResourceKind>::list(&db).await?.is_empty());
    Ok(())
}
