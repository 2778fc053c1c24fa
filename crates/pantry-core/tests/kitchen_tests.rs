mod common;

use pantry_core::{
    session::{run_session, ChannelTicker, RecordingSink, SessionOutcome},
    CheckItem, CookingSession, Database, ExportShoppingList, Id, Kitchen, KitchenBuilder,
    ListHistory, NewRecipe, PantryError, SessionEvent, SessionInput,
};
use tempfile::TempDir;
use tokio::sync::mpsc;

use common::sample_recipe;

/// Kitchen over a database seeded with the given recipes.
async fn seeded_kitchen(recipes: &[NewRecipe]) -> (TempDir, Kitchen, Vec<u64>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("data").join("pantry.db");

    let kitchen = KitchenBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create kitchen");

    let mut db = Database::new(&db_path).unwrap();
    let ids = recipes
        .iter()
        .map(|recipe| db.create_recipe(recipe).unwrap().id)
        .collect();

    (temp_dir, kitchen, ids)
}

#[tokio::test]
async fn test_builder_creates_missing_directories() {
    let (temp_dir, kitchen, _) = seeded_kitchen(&[]).await;

    assert!(temp_dir.path().join("data").join("pantry.db").exists());
    assert_eq!(kitchen.database_path(), temp_dir.path().join("data").join("pantry.db"));
}

#[tokio::test]
async fn test_history_view_and_delete_result() {
    let (_temp_dir, kitchen, ids) = seeded_kitchen(&[
        sample_recipe("Soup", &["water"]),
        sample_recipe("Bread", &["flour"]),
    ])
    .await;

    let history = kitchen
        .recipe_history_view(&ListHistory::default())
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    let output = history.to_string();
    assert!(output.find("Bread").unwrap() < output.find("Soup").unwrap());

    let deleted = kitchen
        .delete_recipe_result(&Id { id: ids[0] })
        .await
        .unwrap();
    assert_eq!(
        deleted.to_string(),
        format!("Deleted recipe 'Soup' (ID: {})\n", ids[0])
    );

    let err = kitchen.delete_recipe(&Id { id: ids[0] }).await.unwrap_err();
    assert!(matches!(err, PantryError::RecipeNotFound { .. }));
}

#[tokio::test]
async fn test_shopping_views() {
    let (temp_dir, kitchen, ids) = 
        seeded_kitchen(&[sample_recipe("Tacos", &["tortillas", "beans"])]).await;

    let added = kitchen
        .add_to_shopping_list_result(&Id { id: ids[0] })
        .await
        .unwrap();
    assert!(added
        .to_string()
        .starts_with("Added 2 ingredient(s) from 'Tacos' to the shopping list"));

    let status = kitchen
        .check_item_status(&CheckItem {
            id: added.resource.items[1].id,
            checked: Some(true),
        })
        .await
        .unwrap();
    assert!(status.message.ends_with("'beans' checked"));

    let view = kitchen.shopping_list_view().await.unwrap();
    assert_eq!(view.item_count(), 2);
    assert!(view.to_string().contains("- [x] beans"));

    let path = temp_dir.path().join("shopping.txt");
    let exported = kitchen
        .export_shopping_list_status(&ExportShoppingList { path: path.clone() })
        .await
        .unwrap();
    assert!(exported.message.starts_with("Exported 2 item(s)"));
    assert!(std::fs::read_to_string(&path)
        .unwrap()
        .contains("Tacos\n-----\n[ ] tortillas\n[x] beans\n"));

    let cleared = kitchen.clear_shopping_list_status().await.unwrap();
    assert!(cleared.message.contains("1 recipe(s) removed"));
}

#[tokio::test]
async fn test_cooking_a_stored_recipe() {
    let (_temp_dir, kitchen, ids) = seeded_kitchen(&[sample_recipe("Porridge", &["oats"])]).await;
    let recipe = kitchen.require_recipe(&Id { id: ids[0] }).await.unwrap();

    let mut session = CookingSession::for_recipe(&recipe).unwrap();
    assert_eq!(session.prep_time(), Some("10 minutes"));

    let (tx, mut rx) = mpsc::channel(8);
    for _ in 0..recipe.instructions.len() {
        tx.send(SessionInput::Advance).await.unwrap();
    }

    let (_tick, mut ticker) = ChannelTicker::new();
    let mut sink = RecordingSink::default();
    let outcome = run_session(&mut session, &mut rx, &mut ticker, &mut sink).await;

    assert_eq!(outcome, SessionOutcome::Completed);
    assert_eq!(sink.events.last(), Some(&SessionEvent::Completed));
    assert!(sink.rejections.is_empty());
}
