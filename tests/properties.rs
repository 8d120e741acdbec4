use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use git_nextver::analyzer::{classify, next_version, ClassificationCounters, RuleTable};
use git_nextver::config::ConventionalCommitsConfig;
use git_nextver::domain::{current_version, BumpClass, CommitRecord, Version};
use git_nextver::record::{build_record, VersionDecisionRecord};
use proptest::prelude::*;

const MESSAGES: &[&str] = &[
    "feat: add X",
    "feat(api): endpoint",
    "fix: typo",
    "chore: cleanup",
    "docs: readme",
    "refactor!: new core",
    "fix: x\n\nBREAKING CHANGE: y",
    "Update README",
    "Merge branch 'main'",
];

const PATCH_LEVEL: &[&str] = &["fix: typo", "chore: cleanup", "docs(readme): wording"];

const UNRECOGNIZED: &[&str] = &[
    "Update README",
    "Merge branch 'main'",
    "wip",
    "feat add without colon",
    "",
];

fn rules() -> RuleTable {
    RuleTable::from_config(&ConventionalCommitsConfig::default()).unwrap()
}

fn to_commits(messages: &[&str]) -> Vec<CommitRecord> {
    let date = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .unwrap();
    messages
        .iter()
        .map(|m| CommitRecord::new(*m, "P", "p@example.com", date))
        .collect()
}

fn messages() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(MESSAGES), 0..20)
}

fn counters() -> impl Strategy<Value = ClassificationCounters> {
    (0u64..5, 0u64..5, 0u64..5).prop_map(|(b, m, p)| ClassificationCounters::new(b, m, p))
}

fn unrecognized() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(UNRECOGNIZED), 0..20)
}

fn date() -> impl Strategy<Value = DateTime<FixedOffset>> {
    // Local year stays within 1969..=8942 for every offset
    (0i64..220_000_000_000, -720i32..=840).prop_map(|(secs, minutes)| {
        let offset = FixedOffset::east_opt(minutes * 60).unwrap();
        Utc.timestamp_opt(secs, 0).unwrap().with_timezone(&offset)
    })
}

fn commit_record() -> impl Strategy<Value = CommitRecord> {
    ("\\PC{0,40}", "[A-Za-z ]{1,20}", "[a-z]{1,8}@example\\.com", date())
        .prop_map(|(message, author, email, date)| CommitRecord::new(message, author, email, date))
}

fn bump_class() -> impl Strategy<Value = BumpClass> {
    prop::sample::select(vec![
        BumpClass::None,
        BumpClass::Patch,
        BumpClass::Minor,
        BumpClass::Major,
    ])
}

fn version() -> impl Strategy<Value = Version> {
    (0u64..1000, 0u64..1000, 0u64..1000).prop_map(|(a, b, c)| Version::new(a, b, c))
}

proptest! {
    #[test]
    fn classification_is_order_independent(
        (original, shuffled) in messages().prop_flat_map(|m| (Just(m.clone()), Just(m).prop_shuffle()))
    ) {
        let rules = rules();
        prop_assert_eq!(
            classify(&to_commits(&original), &rules),
            classify(&to_commits(&shuffled), &rules)
        );
    }

    #[test]
    fn combine_is_associative(a in counters(), b in counters(), c in counters()) {
        prop_assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[test]
    fn next_is_never_lower(current in version(), totals in counters()) {
        let (next, bump) = next_version(current, totals).unwrap();
        prop_assert!(next >= current);
        prop_assert_eq!(next == current, bump == BumpClass::None);
    }

    #[test]
    fn breaking_dominates(mut msgs in messages(), at in 0usize..20) {
        let at = at.min(msgs.len());
        msgs.insert(at, "feat!: breaking");
        let totals = classify(&to_commits(&msgs), &rules());
        prop_assert_eq!(totals.bump_class(), BumpClass::Major);
    }

    #[test]
    fn patch_level_only_bumps_patch(
        current in version(),
        patches in prop::collection::vec(prop::sample::select(PATCH_LEVEL), 1..10),
        noise in unrecognized(),
    ) {
        let mut msgs = patches;
        msgs.extend(noise);
        let totals = classify(&to_commits(&msgs), &rules());
        prop_assert_eq!(totals.bump_class(), BumpClass::Patch);

        let (next, bump) = next_version(current, totals).unwrap();
        prop_assert_eq!(bump, BumpClass::Patch);
        prop_assert_eq!(next, Version::new(current.major, current.minor, current.patch + 1));
    }

    #[test]
    fn unrecognized_messages_keep_version(current in version(), msgs in unrecognized()) {
        let totals = classify(&to_commits(&msgs), &rules());
        prop_assert_eq!(totals.clone(), ClassificationCounters::default());

        let (next, bump) = next_version(current, totals).unwrap();
        prop_assert_eq!(bump, BumpClass::None);
        prop_assert_eq!(next, current);
    }

    #[test]
    fn decision_record_json_is_lossless(
        current in version(),
        next in version(),
        bump in bump_class(),
        commits in prop::collection::vec(commit_record(), 0..5),
        tags in prop::collection::vec("[a-z0-9.v-]{1,12}", 0..6),
        labels in prop::collection::vec("[a-z-]{0,10}", 0..4),
    ) {
        let record = build_record(current, next, bump, commits, tags, labels);
        let json = record.to_json().unwrap();
        prop_assert_eq!(VersionDecisionRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn current_version_is_maximum(versions in prop::collection::vec(version(), 1..10)) {
        let tags: Vec<String> = versions.iter().map(Version::to_string).collect();
        let expected = versions.iter().max().copied().unwrap();
        prop_assert_eq!(current_version(&tags), expected);
    }
}
