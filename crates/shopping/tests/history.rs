use basket_shopping::ShoppingStore;

mod helpers;

#[tokio::test]
async fn test_history_is_monotonic() -> anyhow::Result<()> {
    let store = ShoppingStore::new();
    helpers::add(&store, "u1", "Tea", 3).await?;
    helpers::add(&store, "u1", "Milk", 2).await?;
    helpers::remove(&store, "u1", "tea", 3).await?;
    helpers::remove(&store, "u1", "milk", 1).await?;

    // removals never lower the ranking
    assert_eq!(store.history("u1", 5).await, ["tea", "milk"]);

    helpers::add(&store, "u1", "MILK", 2).await?;
    assert_eq!(store.history("u1", 5).await, ["milk", "tea"]);

    Ok(())
}

#[tokio::test]
async fn test_history_ties_keep_first_recorded_order() -> anyhow::Result<()> {
    let store = ShoppingStore::new();
    helpers::add(&store, "u1", "a", 5).await?;
    helpers::add(&store, "u1", "b", 3).await?;
    helpers::add(&store, "u1", "c", 3).await?;
    helpers::add(&store, "u1", "d", 1).await?;

    assert_eq!(store.history("u1", 2).await, ["a", "b"]);
    assert_eq!(store.history("u1", 10).await, ["a", "b", "c", "d"]);

    Ok(())
}

#[tokio::test]
async fn test_history_counts_merges_and_creates() -> anyhow::Result<()> {
    let store = ShoppingStore::new();
    helpers::add(&store, "u1", "Soap", 1).await?;
    helpers::add(&store, "u1", "Chips", 2).await?;
    helpers::add(&store, "u1", "soap", 2).await?;

    assert_eq!(store.history("u1", 1).await, ["soap"]);

    Ok(())
}

#[tokio::test]
async fn test_failed_add_leaves_history_alone() -> anyhow::Result<()> {
    let store = ShoppingStore::new();
    helpers::add(&store, "u1", "Soap", 1).await?;
    assert!(helpers::add(&store, "u1", "", 4).await.is_err());

    assert_eq!(store.history("u1", 5).await, ["soap"]);

    Ok(())
}
