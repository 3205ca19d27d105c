use session_todos::todo::{lookup, ordering};
use session_todos::validation::{self, MAX_TITLE_LEN};
use session_todos::{
    ItemId, ListId, MemorySessionStore, SessionId, SessionStore, TodoError, TodoLists,
};

fn titles(lists: &TodoLists, list_id: ListId) -> Vec<(String, bool)> {
    lists
        .ordered_items(list_id)
        .unwrap()
        .iter()
        .map(|item| (item.title.clone(), item.done))
        .collect()
}

// 空のリストは完了扱いにならない
#[test]
fn test_empty_list_is_never_done() {
    let mut lists = TodoLists::new();
    let id = lists.create_list("Empty").unwrap().id();
    assert!(!lists.list(id).unwrap().is_done());

    lists.mark_all_done(id).unwrap();
    assert!(!lists.list(id).unwrap().is_done());
}

// addItem → findItemById のラウンドトリップ
#[test]
fn test_add_then_find_round_trip() {
    let mut lists = TodoLists::new();
    let list_id = lists.create_list("Groceries").unwrap().id();
    let item_id = lists.add_item(list_id, "\t Buy milk  ").unwrap().id;

    let list = lookup::find_list_by_id(lists.lists(), list_id).unwrap();
    let item = lookup::find_item_by_id(list, item_id).unwrap();
    assert_eq!(item.title, "Buy milk");
    assert!(!item.done);
}

// 完了トグル後の表示順シナリオ
#[test]
fn test_display_order_scenario() {
    let mut lists = TodoLists::new();
    let a = lists.create_list("A").unwrap().id();
    let milk = lists.add_item(a, "Buy milk").unwrap().id;
    let car = lists.add_item(a, "Wash car").unwrap().id;
    lists.mark_item_done(a, car).unwrap();

    assert_eq!(
        titles(&lists, a),
        vec![("Buy milk".to_string(), false), ("Wash car".to_string(), true)]
    );

    lists.mark_item_done(a, milk).unwrap();
    assert_eq!(
        titles(&lists, a),
        vec![("Buy milk".to_string(), true), ("Wash car".to_string(), true)]
    );
}

// リスト名の重複は大文字小文字を区別して判定
#[test]
fn test_list_title_uniqueness_scenario() {
    let mut lists = TodoLists::new();
    lists.create_list("Groceries").unwrap();

    match lists.create_list("Groceries") {
        Err(TodoError::ValidationFailed(errors)) => {
            assert_eq!(errors.messages(), ["The list title must be unique.".to_string()]);
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert!(lists.create_list("groceries").is_ok());
    assert_eq!(lists.len(), 2);
}

// 存在しないIDの削除は NotFound で、items は変わらない
#[test]
fn test_remove_unknown_item_is_not_found_and_harmless() {
    let mut lists = TodoLists::new();
    let a = lists.create_list("A").unwrap().id();
    lists.add_item(a, "Buy milk").unwrap();
    lists.add_item(a, "Wash car").unwrap();
    let before = lists.list(a).unwrap().items().to_vec();

    let err = lists.remove_item(a, ItemId(42)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(lists.list(a).unwrap().items(), before.as_slice());
}

// タイトル長の境界値
#[test]
fn test_title_length_bounds() {
    let exact = "a".repeat(MAX_TITLE_LEN);
    let over = "a".repeat(MAX_TITLE_LEN + 1);

    assert!(validation::validate_todo_title(&exact).is_ok());
    assert!(validation::validate_todo_title(&over).is_err());
    assert!(validation::validate_todo_title("    ").is_err());
    assert!(validation::validate_list_title(&exact, &[], None).is_ok());
    assert!(validation::validate_list_title(&over, &[], None).is_err());
}

// 表示順は冪等で、未完了が常に先
#[test]
fn test_ordering_properties() {
    let mut lists = TodoLists::new();
    for (title, items) in [
        ("delta", vec![("z", true)]),
        ("Alpha", vec![("y", false), ("x", true)]),
        ("charlie", vec![]),
        ("Bravo", vec![("w", true), ("v", true)]),
    ] {
        let id = lists.create_list(title).unwrap().id();
        for (item, done) in items {
            let item_id = lists.add_item(id, item).unwrap().id;
            if done {
                lists.mark_item_done(id, item_id).unwrap();
            }
        }
    }

    let once: Vec<ListId> = lists.ordered_lists().iter().map(|l| l.id()).collect();
    let again: Vec<ListId> = lists.ordered_lists().iter().map(|l| l.id()).collect();
    assert_eq!(once, again);

    let ordered = lists.ordered_lists();
    let names: Vec<&str> = ordered.iter().map(|l| l.title()).collect();
    assert_eq!(names, vec!["Alpha", "charlie", "Bravo", "delta"]);

    let first_done = ordered.iter().position(|l| l.is_done()).unwrap();
    assert!(ordered[first_done..].iter().all(|l| l.is_done()));

    let items = ordering::order_items(lists.list(ListId(2)).unwrap());
    assert_eq!(items[0].title, "y");
    assert_eq!(items[1].title, "x");
}

// セッションストア経由の読み書き
#[test]
fn test_session_store_round_trip() {
    let store = MemorySessionStore::default();
    let session = SessionId::from("round-trip");

    let mut lists = store.load(&session).unwrap();
    let id = lists.create_list("Groceries").unwrap().id();
    lists.add_item(id, "Milk").unwrap();
    store.save(&session, &lists).unwrap();

    let mut reloaded = store.load(&session).unwrap();
    assert_eq!(reloaded, lists);
    assert_eq!(reloaded.add_item(id, "Eggs").unwrap().id, ItemId(2));
    assert_eq!(reloaded.create_list("Work").unwrap().id(), ListId(2));
}
