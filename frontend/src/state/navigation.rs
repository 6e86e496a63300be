/// Page sections reachable from the navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Inicio,
    Beneficios,
    Ingredientes,
    Comprar,
    Galeria,
    Testimonios,
    Faq,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Inicio,
        Section::Beneficios,
        Section::Ingredientes,
        Section::Comprar,
        Section::Galeria,
        Section::Testimonios,
        Section::Faq,
    ];

    /// Element id of the section's anchor.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::Beneficios => "beneficios",
            Section::Ingredientes => "ingredientes",
            Section::Comprar => "comprar",
            Section::Galeria => "galeria",
            Section::Testimonios => "testimonios",
            Section::Faq => "faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Inicio => "Inicio",
            Section::Beneficios => "Beneficios",
            Section::Ingredientes => "Ingredientes",
            Section::Comprar => "Comprar",
            Section::Galeria => "Galería",
            Section::Testimonios => "Testimonios",
            Section::Faq => "FAQ",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Inicio => "fas fa-house",
            Section::Beneficios => "fas fa-wand-magic-sparkles",
            Section::Ingredientes => "fas fa-cubes",
            Section::Comprar => "fas fa-cart-shopping",
            Section::Galeria => "fas fa-camera",
            Section::Testimonios => "fas fa-comment",
            Section::Faq => "fas fa-circle-question",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Parses a location fragment such as `#faq`.
    pub fn from_hash(hash: &str) -> Option<Self> {
        hash.strip_prefix('#').and_then(Self::from_anchor)
    }
}

/// Something that can bring an anchored element into view.
pub trait SectionScroller {
    /// Smooth-scrolls to the element with `anchor` as id. Returns false
    /// when no such element is mounted.
    fn scroll_to(&self, anchor: &str) -> bool;
}

pub fn navigate<S: SectionScroller>(scroller: &S, section: Section) -> bool {
    let scrolled = scroller.scroll_to(section.anchor());
    if !scrolled {
        log::debug!("No anchor for section {:?}, ignoring", section);
    }
    scrolled
}
