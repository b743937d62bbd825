use super::*;

#[test]
fn clicked_message_names_row_kind_and_column() {
    assert_eq!(clicked_message(COMPONENT_BUTTON, 7, 2), "Clicked row 7 component button column 2");
    assert_eq!(clicked_message(TEMPLATE_BUTTON, 0, 0), "Clicked row 0 template button column 0");
}

#[test]
fn selected_message_names_value_row_and_column() {
    assert_eq!(
        selected_message("Two", 12, 3),
        "Selected value Two in row 12 component combo-box column 3"
    );
}

#[test]
fn channel_notifier_queues_in_order() {
    let (notifier, mut rx) = ChannelNotifier::channel(4);
    notifier.show("first".into());
    notifier.show("second".into());

    let drained = drain(&mut rx);
    let messages: Vec<&str> = drained.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn channel_notifier_drops_when_full() {
    let (notifier, mut rx) = ChannelNotifier::channel(1);
    notifier.show("kept".into());
    notifier.show("dropped".into());

    let drained = drain(&mut rx);
    assert_eq!(drained, vec![Notification { message: "kept".into() }]);
}

#[test]
fn zero_capacity_is_raised_to_one() {
    let (notifier, mut rx) = ChannelNotifier::channel(0);
    notifier.show("only".into());
    assert_eq!(drain(&mut rx).len(), 1);
}
