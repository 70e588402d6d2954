use git_version::git_version;
use stockprompt::system_info::get_system_info;

#[test]
fn system_info_contains_commit_and_profile() {
    let expected = git_version!(
        args = ["--abbrev=10", "--always", "--dirty=-modified"],
        fallback = "unknown"
    );
    let info = get_system_info();
    assert!(info.contains(expected));
    assert!(info.contains("Dev build") || info.contains("Release build"));
    assert!(info.contains("release") || info.contains("development"));
    assert!(info.contains("6 styles, 6 moods"));
}
