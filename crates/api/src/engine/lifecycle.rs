use homepages_core::plugin::Homepages;
use homepages_db::models::post::LifecycleEvent;

/// Hand write events to the plugin in the order the store reported them.
pub fn dispatch(homepages: &Homepages, events: &[LifecycleEvent]) {
    for event in events {
        match event {
            LifecycleEvent::Transition(transition) => {
                homepages.on_transition_post_status(transition);
            }
            LifecycleEvent::Saved(post_id) => homepages.on_save_post(*post_id),
        }
    }
}
