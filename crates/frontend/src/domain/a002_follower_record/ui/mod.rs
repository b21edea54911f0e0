use super::api::fetch_follower_records;
use crate::shared::date_utils::relative_time;
use contracts::domain::a002_follower_record::FollowerRecord;
use leptos::prelude::*;

/// "What your friends added" list, loaded once when the page opens
#[component]
pub fn FollowerFeedList(username: String) -> impl IntoView {
    let (records, set_records) = signal(Vec::<FollowerRecord>::new());

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_follower_records(&username).await {
            Ok(feed) => {
                log::debug!("{} follower records", feed.len());
                set_records.set(feed.into_sorted());
            }
            Err(e) => log::error!("follower records for {}: {}", username, e),
        }
    });

    view! {
        <ul id="follower_records" class="follower-records">
            <For
                each=move || records.get()
                key=|record| record.id
                children=|record: FollowerRecord| {
                    let added = relative_time(&record.timestamp);
                    view! {
                        <li id=record.id.to_string()>
                            <img src=record.gravatar.clone() class="gravatar" alt="" />
                            {record.summary()}
                            " - "
                            {added}
                        </li>
                    }
                }
            />
        </ul>
    }
}
