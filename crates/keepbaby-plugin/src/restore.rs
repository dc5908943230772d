//! One-tick deferred juvenile restores.
//!
//! Each restore is a one-shot scheduler task; the entity it targets is kept
//! here until the task fires.

use std::collections::HashMap;

use keepbaby_plugin_api::ServerApi;

/// Delay between a feeding interaction and the juvenile restore.
pub const RESTORE_DELAY_TICKS: u64 = 1;

/// Pending restores keyed by scheduler task id.
#[derive(Debug)]
pub struct DeferredRestores {
    plugin_name: String,
    pending: HashMap<u32, u64>,
    next_task_id: u32,
}

impl DeferredRestores {
    pub fn new(plugin_name: &str) -> Self {
        Self {
            plugin_name: plugin_name.to_string(),
            pending: HashMap::new(),
            next_task_id: 1,
        }
    }

    fn alloc_task_id(&mut self) -> u32 {
        let id = self.next_task_id;
        self.next_task_id = self.next_task_id.wrapping_add(1);
        id
    }

    /// Schedule a juvenile restore of `runtime_id` on the next tick.
    pub fn schedule(&mut self, runtime_id: u64, api: &mut dyn ServerApi) -> u32 {
        let task_id = self.alloc_task_id();
        self.pending.insert(task_id, runtime_id);
        api.schedule_delayed(&self.plugin_name, RESTORE_DELAY_TICKS, task_id);
        task_id
    }

    /// Remove and return the entity a fired task targets.
    pub fn take(&mut self, task_id: u32) -> Option<u64> {
        self.pending.remove(&task_id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Forget all pending restores. Their tasks, if they still fire, do nothing.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
