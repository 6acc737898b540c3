use crate::{DEFAULT_ALLOWED_EXTENSIONS, has_allowed_extension, secure_filename};

use googletest::prelude::*;

// =========================================================================
// Extension allow-list
// =========================================================================

#[test]
fn given_png_when_checked_then_allowed() {
    assert!(has_allowed_extension("photo.png", DEFAULT_ALLOWED_EXTENSIONS));
    assert!(has_allowed_extension("archive.tar.png", DEFAULT_ALLOWED_EXTENSIONS));
}

#[test]
fn given_other_extension_when_checked_then_rejected() {
    assert!(!has_allowed_extension("photo.jpg", DEFAULT_ALLOWED_EXTENSIONS));
    assert!(!has_allowed_extension("photo.png.exe", DEFAULT_ALLOWED_EXTENSIONS));
}

#[test]
fn given_uppercase_extension_when_checked_then_rejected() {
    assert!(!has_allowed_extension("photo.PNG", DEFAULT_ALLOWED_EXTENSIONS));
}

#[test]
fn given_no_dot_when_checked_then_rejected() {
    assert!(!has_allowed_extension("png", DEFAULT_ALLOWED_EXTENSIONS));
    assert!(!has_allowed_extension("", DEFAULT_ALLOWED_EXTENSIONS));
}

#[test]
fn test_custom_allow_list_is_honored() {
    let allowed = vec!["jpg".to_string(), "gif".to_string()];

    assert!(has_allowed_extension("cat.gif", &allowed));
    assert!(!has_allowed_extension("cat.png", &allowed));
}

// =========================================================================
// Sanitization
// =========================================================================

#[test]
fn given_plain_name_when_secured_then_unchanged() {
    assert_that!(secure_filename("photo.png").unwrap().as_str(), eq("photo.png"));
}

#[test]
fn given_path_traversal_when_secured_then_flattened() {
    assert_that!(secure_filename("../../etc/passwd.png").unwrap().as_str(), eq("etc_passwd.png"));
}

#[test]
fn given_windows_path_when_secured_then_flattened() {
    assert_that!(secure_filename("C:\\Users\\me\\pic.png").unwrap().as_str(), eq("C_Users_me_pic.png"));
}

#[test]
fn given_spaces_when_secured_then_underscored() {
    assert_that!(secure_filename("my  holiday photo.png").unwrap().as_str(), eq("my_holiday_photo.png"));
}

#[test]
fn given_unsafe_characters_when_secured_then_removed() {
    assert_that!(secure_filename("pic<1>?*.png").unwrap().as_str(), eq("pic1.png"));
    assert_that!(secure_filename("café.png").unwrap().as_str(), eq("caf.png"));
}

#[test]
fn given_only_dots_when_secured_then_none() {
    assert_that!(secure_filename(".."), none());
    assert_that!(secure_filename("/"), none());
    assert_that!(secure_filename(""), none());
}

#[test]
fn given_hidden_file_when_secured_then_leading_dot_stripped() {
    assert_that!(secure_filename(".hidden.png").unwrap().as_str(), eq("hidden.png"));
}
