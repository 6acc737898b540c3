use crate::UploadSlot;

use googletest::prelude::*;

#[test]
fn test_slots_map_to_fixed_file_names() {
    assert_that!(UploadSlot::One.file_name(), eq("file_001.png"));
    assert_that!(UploadSlot::Two.file_name(), eq("file_002.png"));
    assert_that!(UploadSlot::Three.file_name(), eq("file_003.png"));
}

#[test]
fn test_slot_numbers_are_one_based() {
    assert_that!(UploadSlot::One.number(), eq(1));
    assert_that!(UploadSlot::Three.number(), eq(3));
}

#[test]
fn test_display_is_zero_padded() {
    assert_that!(UploadSlot::Two.to_string().as_str(), eq("002"));
}
