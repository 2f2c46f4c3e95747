//! Static landing page copy.

pub struct Highlight {
    pub icon: &'static str,
    pub label: &'static str,
}

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub copy: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub image: Option<&'static str>,
}

pub const HERO_HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "✅", label: "Save time" },
    Highlight { icon: "♻️", label: "Reduce waste" },
    Highlight { icon: "🍽️", label: "Eat better" },
];

pub const ABOUT_PILLARS: &[Card] = &[
    Card {
        icon: "🎯",
        title: "Zero thinking",
        copy: "Stop wasting minutes deciding what to cook. AI does it for you.",
    },
    Card {
        icon: "🛒",
        title: "Shop smarter",
        copy: "Get meal ideas based on what’s already in your kitchen.",
    },
    Card {
        icon: "🧑‍🍳",
        title: "Cook confidently",
        copy: "Simple steps anyone can follow — even beginners.",
    },
];

pub const FEATURES: &[Card] = &[
    Card {
        icon: "🟢",
        title: "Ingredient-based generation",
        copy: "Add ingredients with quantities — AI creates complete meals using only what you have.",
    },
    Card {
        icon: "🟢",
        title: "Macro-optimized meals",
        copy: "Set calorie and macro targets and get recipes tailored to your goals.",
    },
    Card {
        icon: "🟢",
        title: "Quick & simple mode",
        copy: "Just choose how many people you're cooking for and get a fast, effortless recipe.",
    },
    Card {
        icon: "🟢",
        title: "Save & manage meals",
        copy: "Save your favorite recipes or remove the ones you don’t want — your personal AI cookbook.",
    },
];

pub const STEPS: &[Card] = &[
    Card {
        icon: "🟩",
        title: "1. Add your on-hand ingredients",
        copy: "Enter the ingredients in your kitchen — include quantities for more accurate meals. EatoraAI™ uses only what you already own.",
    },
    Card {
        icon: "🟦",
        title: "2. Choose your mode",
        copy: "Pick Serving Mode (just tell us how many people you’re cooking for) or Macro Mode (set your calorie & macro targets). The app adapts automatically.",
    },
    Card {
        icon: "🟧",
        title: "3. Click Generate — get your meal instantly",
        copy: "AI creates a complete recipe using your ingredients. Save the meals you love or delete the ones you don’t. Cooking made effortless.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I never imagined I could plate a dish like this at home. EatoraAI™ built the recipe step-by-step from just some ingredients.",
        name: "David S.",
        role: "Home cook",
        image: Some("/testimonials/dish.jpg"),
    },
    Testimonial {
        quote: "Didn't know what to cook. Dropped my ingredients and got this.",
        name: "Tom R.",
        role: "Munchies user",
        image: Some("/testimonials/tom-plate.jpg"),
    },
];
