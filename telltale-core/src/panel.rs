//! Panel context
//!
//! The single state object owned by the firmware's control loop. It ties
//! the decoded wire commands to the channel store, drives the designated
//! switch output, and schedules display redraws.

use heapless::String;
use telltale_protocol::{truthy, ChannelKind, SetCommand};

use crate::pager::PageScheduler;
use crate::render::{render_page, DISPLAY_ROWS};
use crate::store::{ChannelStore, MAX_NAME_LEN};
use crate::traits::{DisplayError, RowDisplay, SwitchOutput};

/// Channel table plus paging state, owned by the main loop
pub struct Panel {
    store: ChannelStore,
    pager: PageScheduler,
    /// Name of the channel mirrored onto the switch output
    switch_channel: String<MAX_NAME_LEN>,
}

impl Panel {
    /// Create a panel whose switch output mirrors `switch_channel`
    pub fn new(switch_channel: &str) -> Self {
        let mut name = String::new();
        for c in switch_channel.chars() {
            if name.push(c).is_err() {
                break;
            }
        }
        Self {
            store: ChannelStore::new(),
            pager: PageScheduler::new(),
            switch_channel: name,
        }
    }

    /// Read access to the channel table
    pub fn store(&self) -> &ChannelStore {
        &self.store
    }

    /// Current display page
    pub fn page(&self) -> usize {
        self.pager.page()
    }

    /// Apply one decoded command.
    ///
    /// A `BOOL` command addressed to the designated switch channel drives
    /// the output pin first - unconditionally, so the pin level mirrors the
    /// wire even when the stored value is unchanged. The store update then
    /// follows, and the display snaps back to page zero.
    pub fn apply<S, D>(
        &mut self,
        cmd: &SetCommand<'_>,
        switch: &mut S,
        display: &mut D,
    ) -> Result<(), DisplayError>
    where
        S: SwitchOutput,
        D: RowDisplay,
    {
        if cmd.kind == ChannelKind::Bool && cmd.channel.eq_ignore_ascii_case(&self.switch_channel) {
            switch.set_active(truthy(cmd.payload));
        }

        self.store.upsert(cmd.channel, cmd.kind, cmd.payload);

        let page = self.pager.jump_front();
        self.redraw(page, display)
    }

    /// Poll the rotation timer, redrawing when a page flip is due
    pub fn tick<D: RowDisplay>(&mut self, now_ms: u64, display: &mut D) -> Result<(), DisplayError> {
        if let Some(page) = self.pager.poll(now_ms, self.store.len()) {
            self.redraw(page, display)?;
        }
        Ok(())
    }

    fn redraw<D: RowDisplay>(&mut self, page: usize, display: &mut D) -> Result<(), DisplayError> {
        let screen = render_page(&mut self.store, page);
        for row in 0..DISPLAY_ROWS {
            display.write_row(row as u8, screen.row(row))?;
        }
        Ok(())
    }
}
