use soniq::player::PlayerQueue;
use soniq::types::TrackDescriptor;
use soniq::utils::parse_track_number;

// Helper function to create a test track
fn create_test_track(id: &str, name: &str) -> TrackDescriptor {
    TrackDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        artist: format!("{} Artist", name),
        cover: Some(format!("https://images.example/{}.jpg", id)),
        preview: format!("https://previews.example/{}.mp3", id),
    }
}

fn three_track_queue() -> PlayerQueue {
    let mut queue = PlayerQueue::new();
    queue.load(vec![
        create_test_track("t1", "First"),
        create_test_track("t2", "Second"),
        create_test_track("t3", "Third"),
    ]);
    queue
}

#[test]
fn test_new_queue_is_empty() {
    let queue = PlayerQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.position(), None);
    assert!(queue.current().is_none());
}

#[test]
fn test_load_empty_leaves_empty_state() {
    let mut queue = PlayerQueue::new();
    let first = queue.load(vec![]);
    assert!(first.is_none());
    assert!(queue.is_empty());
    assert_eq!(queue.position(), None);
    assert!(queue.current().is_none());
}

#[test]
fn test_load_positions_cursor_on_first_track() {
    let mut queue = PlayerQueue::new();
    let first = queue
        .load(vec![
            create_test_track("t1", "First"),
            create_test_track("t2", "Second"),
            create_test_track("t3", "Third"),
        ])
        .cloned();

    assert_eq!(first.as_ref().map(|t| t.id.as_str()), Some("t1"));
    assert_eq!(queue.position(), Some(0));
    assert_eq!(queue.current().map(|t| t.id.as_str()), Some("t1"));
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_load_replaces_queue_wholesale() {
    let mut queue = three_track_queue();
    queue.next();

    let first = queue.load(vec![create_test_track("x1", "Other")]).cloned();
    assert_eq!(first.map(|t| t.id), Some("x1".to_string()));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.position(), Some(0));

    // loading empty transitions back to the empty state
    queue.load(vec![]);
    assert!(queue.is_empty());
    assert_eq!(queue.position(), None);
}

#[test]
fn test_play_at_sets_cursor_and_returns_track() {
    let mut queue = three_track_queue();
    let track = queue.play_at(2).cloned();
    assert_eq!(track.map(|t| t.id), Some("t3".to_string()));
    assert_eq!(queue.position(), Some(2));
}

#[test]
fn test_play_at_out_of_range_is_silent_noop() {
    let mut queue = three_track_queue();
    queue.play_at(1);

    let track = queue.play_at(5);
    assert!(track.is_none());
    assert_eq!(queue.position(), Some(1));
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.current().map(|t| t.id.as_str()), Some("t2"));
}

#[test]
fn test_play_at_on_empty_queue_is_noop() {
    let mut queue = PlayerQueue::new();
    assert!(queue.play_at(0).is_none());
    assert_eq!(queue.position(), None);
}

#[test]
fn test_next_advances_and_wraps_around() {
    let mut queue = three_track_queue();

    assert_eq!(queue.next().map(|t| t.id.as_str()), Some("t2"));
    assert_eq!(queue.next().map(|t| t.id.as_str()), Some("t3"));

    // from the last index, next wraps to the first
    assert_eq!(queue.next().map(|t| t.id.as_str()), Some("t1"));
    assert_eq!(queue.position(), Some(0));
}

#[test]
fn test_previous_retreats_and_wraps_around() {
    let mut queue = three_track_queue();

    // from index 0, previous wraps to the last index
    assert_eq!(queue.previous().map(|t| t.id.as_str()), Some("t3"));
    assert_eq!(queue.position(), Some(2));

    assert_eq!(queue.previous().map(|t| t.id.as_str()), Some("t2"));
    assert_eq!(queue.position(), Some(1));
}

#[test]
fn test_next_and_previous_on_empty_queue_are_noops() {
    let mut queue = PlayerQueue::new();
    assert!(queue.next().is_none());
    assert!(queue.previous().is_none());
    assert_eq!(queue.position(), None);
}

#[test]
fn test_single_track_wraps_onto_itself() {
    let mut queue = PlayerQueue::new();
    queue.load(vec![create_test_track("only", "Only")]);

    assert_eq!(queue.next().map(|t| t.id.as_str()), Some("only"));
    assert_eq!(queue.position(), Some(0));
    assert_eq!(queue.previous().map(|t| t.id.as_str()), Some("only"));
    assert_eq!(queue.position(), Some(0));
}

#[test]
fn test_track_numbers_are_one_based() {
    let mut queue = three_track_queue();

    // typing the number a listing displayed selects exactly that track
    let index = parse_track_number("1").unwrap();
    assert_eq!(queue.play_at(index).map(|t| t.id.as_str()), Some("t1"));

    let index = parse_track_number("3").unwrap();
    assert_eq!(queue.play_at(index).map(|t| t.id.as_str()), Some("t3"));

    // zero and non-numeric input select nothing
    assert_eq!(parse_track_number("0"), None);
    assert_eq!(parse_track_number("x"), None);

    // numbers past the end fall through to the silent play_at guard
    let index = parse_track_number("4").unwrap();
    assert!(queue.play_at(index).is_none());
    assert_eq!(queue.position(), Some(2));
}

#[test]
fn test_current_follows_transitions() {
    let mut queue = three_track_queue();
    queue.next();
    assert_eq!(queue.current().map(|t| t.id.as_str()), Some("t2"));
    queue.play_at(0);
    assert_eq!(queue.current().map(|t| t.id.as_str()), Some("t1"));
}
