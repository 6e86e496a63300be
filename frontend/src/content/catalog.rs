use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Benefit {
    pub icon: &'static str,
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: "fas fa-wand-magic-sparkles",
        accent: "accent-orange",
        title: "Antioxidante Natural",
        description: "La cúrcuma combate los radicales libres y previene el envejecimiento prematuro",
    },
    Benefit {
        icon: "fas fa-leaf",
        accent: "accent-green",
        title: "100% Natural",
        description: "Ingredientes orgánicos: Glicerina, Cúrcuma y Aceite esencial de árbol de té",
    },
    Benefit {
        icon: "fas fa-shield-halved",
        accent: "accent-orange",
        title: "Suaviza la Piel",
        description: "Propiedades antiinflamatorias que calman y nutren todo tipo de piel",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ingredient {
    pub name: &'static str,
    pub description: &'static str,
}

pub const INGREDIENTS: [Ingredient; 3] = [
    Ingredient {
        name: "Glicerina (C3H8O3)",
        description: "Hidrata profundamente y mantiene la suavidad natural de la piel",
    },
    Ingredient {
        name: "Cúrcuma",
        description: "Poderoso antioxidante con propiedades antiinflamatorias",
    },
    Ingredient {
        name: "Aceite de Árbol de Té",
        description: "Propiedades antibacterianas y purificantes naturales",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub image: Option<&'static str>,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    pub fn stars(&self) -> usize {
        usize::from(self.rating.min(Self::MAX_RATING))
    }

    pub fn image(&self) -> &'static str {
        self.image.unwrap_or(config::CUSTOMER_PLACEHOLDER_IMAGE)
    }
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "María González",
        rating: 5,
        comment: "Mi piel se ve más luminosa desde que uso Cúrcuma Care. ¡Lo recomiendo totalmente!",
        image: Some("/images/customer.svg?height=60&width=60"),
    },
    Testimonial {
        name: "Ana Rodríguez",
        rating: 5,
        comment: "Perfecto para mi piel sensible. No irrita y deja una sensación muy suave.",
        image: Some("/images/customer.svg?height=60&width=60"),
    },
    Testimonial {
        name: "Carmen López",
        rating: 5,
        comment: "El aroma del árbol de té es increíble y los resultados se notan desde la primera semana.",
        image: Some("/images/customer.svg?height=60&width=60"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "¿Para qué tipo de piel es recomendado?",
        answer: "Nuestro jabón Cúrcuma Care es ideal para todo tipo de piel, especialmente piel grasa, mixta y con tendencia al acné. También es suave para pieles sensibles gracias a sus ingredientes naturales.",
    },
    FaqEntry {
        question: "¿Qué ingredientes contiene exactamente?",
        answer: "Contiene Glicerina (C3H8O3), Cúrcuma y Aceite esencial de árbol de té. Todos los ingredientes son 100% naturales y orgánicos.",
    },
    FaqEntry {
        question: "¿Cuánto tiempo dura cada jabón?",
        answer: "Cada jabón tiene una duración aproximada de 4-6 semanas con uso diario, dependiendo de la frecuencia de uso.",
    },
    FaqEntry {
        question: "¿Cómo debo conservar el jabón?",
        answer: "Mantén el jabón en un lugar seco y fresco, preferiblemente en una jabonera que permita el drenaje del agua para preservar sus propiedades naturales.",
    },
];

/// Files under `config::SOAP_IMAGE_DIR` shown in the gallery grid.
pub const GALLERY: [&str; 4] = ["3.png", "5.jpg", "4.jpg", "7.png"];

pub fn gallery_image(file: &str) -> String {
    format!("{}/{}", config::SOAP_IMAGE_DIR, file)
}

pub const COPYRIGHT_YEAR: u16 = 2025;
pub const BRAND: &str = "Seranova";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_count_is_capped() {
        let t = Testimonial {
            rating: 9,
            ..TESTIMONIALS[0]
        };
        assert_eq!(t.stars(), 5);
        assert_eq!(TESTIMONIALS[1].stars(), 5);
    }

    #[test]
    fn missing_portrait_falls_back_to_placeholder() {
        let t = Testimonial {
            image: None,
            ..TESTIMONIALS[1]
        };
        assert_eq!(t.image(), "/images/customer.svg");
        assert_eq!(TESTIMONIALS[0].image(), "/images/customer.svg?height=60&width=60");
    }

    #[test]
    fn gallery_paths_live_under_soap_dir() {
        assert_eq!(gallery_image(GALLERY[1]), "/images/soap/5.jpg");
    }
}
