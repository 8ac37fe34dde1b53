//! Built-in sample folders used when no state file is configured

use folders::{
    ALL_FOLDER_ID, FolderCounters, FolderId, FolderInvite, FolderRecord, FormattedText,
    PlanLimits, StateFile, TextEntity, TextEntityKind,
};
use std::collections::BTreeMap;

pub fn sample_state() -> StateFile {
    let work = FolderRecord::new(2, "💼 Work").with_included([101, 102, 103]);

    let mut family = FolderRecord::new(3, "Family").with_included([201, 202]);
    family.emoticon = Some("🏠".to_string());

    let mut news = FolderRecord::new(
        4,
        FormattedText::plain("Daily News")
            .with_entity(TextEntity::new(TextEntityKind::Bold, 0, 5)),
    );
    news.channels = true;
    news.exclude_muted = true;

    let friends = FolderRecord::new(5, "🎉 Friends")
        .with_included([301, 302])
        .as_chat_list();

    let mut bots = FolderRecord::new(6, "Bots");
    bots.bots = true;

    let mut invites = BTreeMap::new();
    invites.insert(
        FolderId(5),
        vec![FolderInvite::new("https://t.me/addlist/friends")],
    );

    let mut counters = BTreeMap::new();
    counters.insert(FolderId(2), FolderCounters::new(4, 2));
    counters.insert(FolderId(3), FolderCounters::new(1, 0));
    counters.insert(FolderId(5), FolderCounters::new(12, 3));

    StateFile {
        ordered_ids: Some(vec![
            ALL_FOLDER_ID,
            FolderId(2),
            FolderId(3),
            FolderId(4),
            FolderId(5),
            FolderId(6),
        ]),
        folders: vec![work, family, news, friends, bots],
        invites,
        counters,
        limits: PlanLimits::default(),
        active_folder: 0,
    }
}
