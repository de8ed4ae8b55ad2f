//! Dashboard statistics over quest and crew snapshots loaded from JSON

use chrono::{DateTime, TimeZone, Utc};

use lifequest::stats::{
    crew_level, crew_summary_at, get_quest_statistics_at, get_quest_urgency_at,
    sort_quests_by_priority_at, QuestUrgency,
};
use lifequest::{CrewMember, CrewRole, Quest, QuestStatus};

const QUESTS_JSON: &str = r#"[
    {
        "id": "q-1",
        "title": "Finish the Rust book",
        "category": "learning",
        "difficulty": 3,
        "status": "active",
        "progress": 40,
        "completed_milestones": 2,
        "total_milestones": 5,
        "xp_reward": 200
    },
    {
        "id": "q-2",
        "title": "File taxes",
        "category": "chores",
        "difficulty": 2,
        "deadline": "2024-04-10T00:00:00Z",
        "status": "active",
        "progress": 10,
        "xp_reward": 100
    },
    {
        "id": "q-3",
        "title": "Meditate",
        "category": "health",
        "difficulty": 1,
        "status": "completed",
        "progress": 100,
        "is_daily": true,
        "xp_reward": 20
    },
    {
        "id": "q-4",
        "title": "Run a half marathon",
        "category": "health",
        "difficulty": 5,
        "deadline": "2024-04-20T09:00:00Z",
        "status": "paused",
        "progress": 30,
        "xp_reward": 800
    }
]"#;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 12, 12, 0, 0).unwrap()
}

fn quests() -> Vec<Quest> {
    serde_json::from_str(QUESTS_JSON).unwrap()
}

#[test]
fn test_statistics_from_snapshot() {
    let stats = get_quest_statistics_at(&quests(), now());

    assert_eq!(stats.total, 4);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.paused, 1);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.completion_rate, 25.0);
    // (40 + 10 + 100 + 30) / 4
    assert_eq!(stats.average_progress, 45.0);
    assert_eq!(stats.xp_earned, 20);
    assert_eq!(stats.xp_available, 300);
}

#[test]
fn test_empty_statistics_serialize_without_nan() {
    let stats = get_quest_statistics_at(&[], now());
    let json = serde_json::to_string(&stats).unwrap();
    assert!(!json.contains("NaN"));
    assert!(!json.contains("null"));
    assert_eq!(stats.total, 0);
    assert_eq!(stats.completion_rate, 0.0);
    assert_eq!(stats.average_progress, 0.0);
}

#[test]
fn test_out_of_range_progress_is_clamped_on_load() {
    let quests: Vec<Quest> = serde_json::from_str(
        r#"[{
            "id": "q-9",
            "title": "Overreported",
            "category": "learning",
            "difficulty": 2,
            "status": "active",
            "progress": 250
        }]"#,
    )
    .unwrap();

    assert_eq!(quests[0].progress, 100);
    let stats = get_quest_statistics_at(&quests, now());
    assert_eq!(stats.average_progress, 100.0);
}

#[test]
fn test_priority_order_from_snapshot() {
    let mut quests = quests();
    sort_quests_by_priority_at(&mut quests, now());

    let order: Vec<&str> = quests.iter().map(|q| q.id.as_str()).collect();
    // overdue first, then the half marathon due within the week
    assert_eq!(order, ["q-2", "q-4", "q-1", "q-3"]);
    assert_eq!(get_quest_urgency_at(&quests[0], now()), QuestUrgency::Overdue);
    assert_eq!(get_quest_urgency_at(&quests[1], now()), QuestUrgency::Medium);
}

#[test]
fn test_status_transitions_on_snapshot() {
    let quests = quests();
    let paused = quests.iter().find(|q| q.status == QuestStatus::Paused).unwrap();
    assert_eq!(paused.status.transition(QuestStatus::Active), Ok(QuestStatus::Active));

    let completed = quests.iter().find(|q| q.is_completed()).unwrap();
    assert!(completed.status.transition(QuestStatus::Active).is_err());
}

#[test]
fn test_crew_roster_from_json() {
    let roster: Vec<CrewMember> = serde_json::from_str(
        r#"[
            {
                "user_id": "u1",
                "display_name": "Ada",
                "role": "leader",
                "xp_contributed": 2400,
                "joined_at": "2024-01-01T00:00:00Z",
                "last_active_at": "2024-04-11T08:00:00Z"
            },
            {
                "user_id": "u2",
                "display_name": "Linus",
                "role": "member",
                "xp_contributed": 900,
                "joined_at": "2024-02-01T00:00:00Z"
            }
        ]"#,
    )
    .unwrap();

    assert!(roster[0].role.can_manage_members());
    assert!(!roster[1].role.can_manage_members());
    assert_eq!(roster[1].role, CrewRole::Member);

    let summary = crew_summary_at(&roster, now());
    assert_eq!(summary.total_xp, 3300);
    assert_eq!(summary.level, crew_level(3300));
    assert_eq!(summary.level, 4);
    assert_eq!(summary.active_members, 1);
    assert_eq!(summary.top_contributor.as_deref(), Some("Ada"));
}
