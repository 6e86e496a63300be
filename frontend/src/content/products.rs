use crate::config;

/// Price of a single bar, in cents.
pub const UNIT_PRICE_CENTS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    pub title: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub units: u32,
    pub price_cents: u32,
    pub featured: bool,
    pub cta: &'static str,
    /// Message pre-filled in the WhatsApp chat.
    pub inquiry: &'static str,
}

impl Product {
    /// What the bars would cost bought one by one.
    pub fn list_price_cents(&self) -> u32 {
        self.units * UNIT_PRICE_CENTS
    }

    pub fn savings_cents(&self) -> Option<u32> {
        self.list_price_cents()
            .checked_sub(self.price_cents)
            .filter(|saved| *saved > 0)
    }

    pub fn purchase_url(&self) -> String {
        whatsapp_link(config::WHATSAPP_NUMBER, self.inquiry)
    }
}

pub const PRODUCTS: [Product; 2] = [
    Product {
        title: "1 Unidad",
        blurb: "Perfecto para probar nuestro producto",
        image: "/images/soap/6.png",
        alt: "Cúrcuma Care - 1 Unidad",
        units: 1,
        price_cents: 300,
        featured: false,
        cta: "Comprar Ahora",
        inquiry: "Hola, estoy interesad@ en tu jabón Cúrcuma Care por unidad: https://i.pinimg.com/736x/83/06/79/8306798d8e6c620765184ac26c8fd377.jpg",
    },
    Product {
        title: "Pack de 6 Unidades",
        blurb: "Ahorra más con nuestro pack familiar",
        image: "/images/soap/8.png",
        alt: "Cúrcuma Care - Pack de 6",
        units: 6,
        price_cents: 1500,
        featured: true,
        cta: "Comprar Pack",
        inquiry: "Hola, estoy interesad@ en la presentación de 6 unidades del jabón Cúrcuma Care: https://i.pinimg.com/736x/42/5b/f9/425bf966ded24004fd7a2e9d41983260.jpg",
    },
];

pub const FEATURED_BADGE: &str = "¡Más Popular!";

pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!(
        "{}/{}?text={}",
        config::WHATSAPP_BASE_URL,
        number,
        urlencoding::encode(text)
    )
}

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
