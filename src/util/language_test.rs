use super::*;

#[test]
fn detects_each_known_extension() {
    assert_eq!(BotLanguage::detect("bot.py"), Some(BotLanguage::Python));
    assert_eq!(BotLanguage::detect("bot.php"), Some(BotLanguage::Php));
    assert_eq!(BotLanguage::detect("bot.js"), Some(BotLanguage::Node));
    assert_eq!(BotLanguage::detect("bot.sh"), Some(BotLanguage::Bash));
}

#[test]
fn extension_match_ignores_case() {
    assert_eq!(BotLanguage::detect("script.PY"), Some(BotLanguage::Python));
    assert_eq!(BotLanguage::detect("Run.Sh"), Some(BotLanguage::Bash));
}

#[test]
fn only_last_extension_counts() {
    assert_eq!(BotLanguage::detect("bundle.min.js"), Some(BotLanguage::Node));
    assert_eq!(BotLanguage::detect("script.py.bak"), None);
}

#[test]
fn unknown_extension_is_none() {
    assert_eq!(BotLanguage::detect("archive.zip"), None);
    assert_eq!(BotLanguage::detect("Makefile"), None);
    assert_eq!(BotLanguage::detect(""), None);
}

#[test]
fn select_values_match_selector_options() {
    assert_eq!(BotLanguage::Python.select_value(), "python");
    assert_eq!(BotLanguage::Php.select_value(), "php");
    assert_eq!(BotLanguage::Node.select_value(), "node");
    assert_eq!(BotLanguage::Bash.select_value(), "bash");
}
