//! Transient toast notices.
//!
//! DESIGN
//! ======
//! Notices are plain data; the `Toaster` component renders them and schedules
//! their dismissal. User-facing copy is Portuguese, matching the site.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Visual weight of a notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// A single toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    fn new(title: &str, description: &str, variant: NoticeVariant) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), variant }
    }

    #[must_use]
    pub fn empty_product() -> Self {
        Self::new("Campo vazio", "Por favor, insira o nome do produto", NoticeVariant::Destructive)
    }

    #[must_use]
    pub fn ad_generated() -> Self {
        Self::new("Anúncio gerado!", "Seu anúncio mágico está pronto", NoticeVariant::Default)
    }

    #[must_use]
    pub fn generation_failed() -> Self {
        Self::new(
            "Erro",
            "Não foi possível gerar o anúncio. Tente novamente.",
            NoticeVariant::Destructive,
        )
    }

    #[must_use]
    pub fn text_copied() -> Self {
        Self::new("Copiado!", "Texto copiado para a área de transferência", NoticeVariant::Default)
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// Notices currently on screen, oldest first, each with a stable id.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<(u64, Notice)>,
    next_id: u64,
}

/// Upper bound on simultaneously visible notices; older ones are evicted.
pub const MAX_VISIBLE: usize = 3;

impl NoticeState {
    /// Show `notice` and return its id for later dismissal.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, notice));
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove the notice with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }
}
