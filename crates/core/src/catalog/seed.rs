//! Built-in storefront catalog, loaded once when no catalog file is configured.

use crate::catalog::record::{PackageRecord, ProductRecord, SpecsRecord};
use crate::domain::package::PackageTier;
use crate::domain::product::{Badge, Category, Condition, UseCase};

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    price: u64,
    condition: Condition,
    processor: &'static str,
    ram: &'static str,
    storage: &'static str,
    screen: &'static str,
    graphics: &'static str,
    features: &'static [&'static str],
    badge: Option<Badge>,
    use_cases: &'static [UseCase],
    category: Category,
}

struct SeedPackage {
    id: &'static str,
    tier: PackageTier,
    title: &'static str,
    subtitle: &'static str,
    laptops: &'static [&'static str],
    price: u64,
    features: &'static [&'static str],
    badge: &'static str,
}

const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        id: "hp-elitebook-1040-g8",
        name: "HP EliteBook 1040 G8",
        brand: "HP",
        price: 1_450_000,
        condition: Condition::Refurbished,
        processor: "Intel Core i7 11th Gen",
        ram: "16GB DDR4",
        storage: "512GB NVMe SSD",
        screen: "14\" FHD IPS",
        graphics: "Intel Iris Xe Graphics",
        features: &[
            "Premium aluminum build",
            "Thunderbolt 4 ports",
            "Long battery life",
            "Backlit keyboard",
            "Bang & Olufsen speakers",
            "IR webcam with privacy shutter",
        ],
        badge: Some(Badge::New),
        use_cases: &[UseCase::Business, UseCase::Design],
        category: Category::Premium,
    },
    SeedProduct {
        id: "surface-laptop-4",
        name: "Microsoft Surface Laptop 4",
        brand: "Microsoft",
        price: 1_200_000,
        condition: Condition::Refurbished,
        processor: "AMD Ryzen 5 / Intel Core i5",
        ram: "16GB LPDDR4x",
        storage: "512GB NVMe SSD",
        screen: "13.5\" PixelSense Touchscreen",
        graphics: "AMD Radeon / Intel Iris Xe",
        features: &[
            "Premium Alcantara keyboard",
            "Touchscreen display",
            "All-day battery life",
            "Sleek design",
            "Windows 11 ready",
            "Fast Face authentication",
        ],
        badge: Some(Badge::Bestseller),
        use_cases: &[UseCase::Business, UseCase::Design, UseCase::Student],
        category: Category::Premium,
    },
    SeedProduct {
        id: "hp-elitebook-845-g8-r7",
        name: "HP EliteBook 845 G8 (Ryzen 7)",
        brand: "HP",
        price: 770_000,
        condition: Condition::Refurbished,
        processor: "AMD Ryzen 7 PRO 5850U",
        ram: "16GB DDR4",
        storage: "512GB NVMe SSD",
        screen: "14\" FHD IPS",
        graphics: "AMD Radeon Graphics",
        features: &[
            "Business-class performance",
            "Lightweight design",
            "MIL-STD tested durability",
            "Fast charging",
            "Excellent keyboard",
            "12 months warranty",
        ],
        badge: Some(Badge::Bestseller),
        use_cases: &[UseCase::Business, UseCase::Student, UseCase::Office],
        category: Category::MidRange,
    },
    SeedProduct {
        id: "hp-elitebook-845-g8-r5",
        name: "HP EliteBook 845 G8 (Ryzen 5)",
        brand: "HP",
        price: 770_000,
        condition: Condition::Refurbished,
        processor: "AMD Ryzen 5 PRO 4650U",
        ram: "16GB DDR4",
        storage: "512GB NVMe SSD",
        screen: "14\" FHD IPS",
        graphics: "AMD Radeon Graphics",
        features: &[
            "Great multitasking",
            "Professional build quality",
            "Long battery life",
            "Secure BIOS",
            "Good for productivity",
            "9 months warranty",
        ],
        badge: None,
        use_cases: &[UseCase::Office, UseCase::Student],
        category: Category::MidRange,
    },
    SeedProduct {
        id: "surface-laptop-3",
        name: "Microsoft Surface Laptop 3",
        brand: "Microsoft",
        price: 750_000,
        condition: Condition::Refurbished,
        processor: "Intel Core i5 / i7 10th Gen",
        ram: "8GB / 16GB LPDDR4x",
        storage: "256GB / 512GB NVMe SSD",
        screen: "13.5\" PixelSense Touchscreen",
        graphics: "Intel Iris Plus Graphics",
        features: &[
            "Touchscreen display",
            "Premium materials",
            "Great speakers",
            "Windows Hello",
            "Lightweight",
            "6 months warranty",
        ],
        badge: Some(Badge::StudentPick),
        use_cases: &[UseCase::Student, UseCase::Design, UseCase::Office],
        category: Category::MidRange,
    },
    SeedProduct {
        id: "surface-laptop-2",
        name: "Microsoft Surface Laptop 2",
        brand: "Microsoft",
        price: 750_000,
        condition: Condition::Refurbished,
        processor: "Intel Core i5 / i7 8th Gen",
        ram: "8GB LPDDR3",
        storage: "256GB NVMe SSD",
        screen: "13.5\" PixelSense Touchscreen",
        graphics: "Intel UHD Graphics 620",
        features: &[
            "Classic Surface design",
            "Vibrant touchscreen",
            "Comfortable typing",
            "Portable and light",
            "Good battery life",
            "6 months warranty",
        ],
        badge: None,
        use_cases: &[UseCase::Student, UseCase::Office],
        category: Category::MidRange,
    },
    SeedProduct {
        id: "hp-elitebook-835-g7",
        name: "HP EliteBook 835 G7",
        brand: "HP",
        price: 650_000,
        condition: Condition::Refurbished,
        processor: "AMD Ryzen 5 PRO 4650U",
        ram: "8GB / 16GB DDR4",
        storage: "256GB / 512GB NVMe SSD",
        screen: "13.3\" FHD IPS",
        graphics: "AMD Radeon Graphics",
        features: &[
            "Ultra-portable 13.3\" design",
            "Business security features",
            "Fast performance",
            "Durable build",
            "Great for travel",
            "9 months warranty",
        ],
        badge: None,
        use_cases: &[UseCase::Business, UseCase::Student],
        category: Category::MidRange,
    },
    SeedProduct {
        id: "hp-pro-x2",
        name: "HP Pro x2 612 G2 (2-in-1)",
        brand: "HP",
        price: 650_000,
        condition: Condition::Refurbished,
        processor: "Intel Core i5 7th Gen",
        ram: "8GB LPDDR3",
        storage: "256GB SSD",
        screen: "12\" FHD Touchscreen",
        graphics: "Intel HD Graphics 615",
        features: &[
            "Detachable keyboard included",
            "Touchscreen with stylus support",
            "2-in-1 versatility",
            "Perfect for presentations",
            "Compact and portable",
            "6 months warranty",
        ],
        badge: Some(Badge::StudentPick),
        use_cases: &[UseCase::Student, UseCase::Design],
        category: Category::MidRange,
    },
    SeedProduct {
        id: "hp-probook-640-g5",
        name: "HP ProBook 640 G5",
        brand: "HP",
        price: 640_000,
        condition: Condition::Refurbished,
        processor: "Intel Core i5 8th Gen",
        ram: "8GB / 16GB DDR4",
        storage: "256GB / 512GB SSD",
        screen: "14\" HD / FHD",
        graphics: "Intel UHD Graphics 620",
        features: &[
            "Reliable performance",
            "Durable design",
            "Good connectivity",
            "Business features",
            "Value for money",
            "6 months warranty",
        ],
        badge: None,
        use_cases: &[UseCase::Office, UseCase::Student],
        category: Category::MidRange,
    },
    SeedProduct {
        id: "hp-probook-11e-g5",
        name: "HP ProBook 11 EE G5",
        brand: "HP",
        price: 380_000,
        condition: Condition::Refurbished,
        processor: "Intel Celeron N4100",
        ram: "4GB / 8GB DDR4",
        storage: "128GB / 256GB SSD",
        screen: "11.6\" HD",
        graphics: "Intel UHD Graphics 600",
        features: &[
            "Perfect for students",
            "Compact and lightweight",
            "Durable construction",
            "Long battery life",
            "Great for basic tasks",
            "6 months warranty",
        ],
        badge: Some(Badge::StudentPick),
        use_cases: &[UseCase::Student],
        category: Category::Budget,
    },
    SeedProduct {
        id: "hp-probook-mt22",
        name: "HP ProBook MT22",
        brand: "HP",
        price: 420_000,
        condition: Condition::Refurbished,
        processor: "AMD A-Series A4/A6",
        ram: "8GB DDR4",
        storage: "256GB SSD",
        screen: "12.5\" HD",
        graphics: "AMD Radeon R4/R5",
        features: &[
            "Affordable and reliable",
            "Good for everyday use",
            "Compact 12.5\" form factor",
            "Decent performance",
            "Student-friendly",
            "6 months warranty",
        ],
        badge: None,
        use_cases: &[UseCase::Student, UseCase::Office],
        category: Category::Budget,
    },
    SeedProduct {
        id: "nec-versapro-11e",
        name: "NEC VersaPro 11e",
        brand: "NEC",
        price: 350_000,
        condition: Condition::Refurbished,
        processor: "Intel Celeron N3450",
        ram: "4GB DDR3L",
        storage: "128GB SSD",
        screen: "11.6\" HD",
        graphics: "Intel HD Graphics 500",
        features: &[
            "Budget-friendly option",
            "Japanese quality build",
            "Lightweight and portable",
            "Good for basic computing",
            "Great for students",
            "6 months warranty",
        ],
        badge: Some(Badge::StudentPick),
        use_cases: &[UseCase::Student],
        category: Category::Budget,
    },
    SeedProduct {
        id: "dell-latitude-3120",
        name: "Dell Latitude 3120",
        brand: "Dell",
        price: 350_000,
        condition: Condition::Refurbished,
        processor: "Intel Celeron N4500",
        ram: "4GB / 8GB DDR4",
        storage: "128GB / 256GB SSD",
        screen: "11.6\" HD",
        graphics: "Intel UHD Graphics",
        features: &[
            "Education-focused design",
            "Rugged and durable",
            "Spill-resistant keyboard",
            "Compact size",
            "Perfect for students",
            "6 months warranty",
        ],
        badge: None,
        use_cases: &[UseCase::Student],
        category: Category::Budget,
    },
];

const SEED_PACKAGES: &[SeedPackage] = &[
    SeedPackage {
        id: "secondary-starter",
        tier: PackageTier::SecondaryStarter,
        title: "Secondary School Starter",
        subtitle: "Perfect for O-Level & A-Level Students",
        laptops: &["nec-versapro-11e", "dell-latitude-3120", "hp-probook-11e-g5"],
        price: 350_000,
        features: &[
            "11.6\" portable laptops",
            "Perfect for research & assignments",
            "Microsoft Office compatible",
            "Long battery life",
            "Lightweight design",
            "6 months warranty",
        ],
        badge: "Most Popular",
    },
    SeedPackage {
        id: "university-essential",
        tier: PackageTier::UniversityEssential,
        title: "University Essential Pack",
        subtitle: "Great for General Studies & Business Students",
        laptops: &["hp-probook-mt22", "hp-pro-x2", "hp-elitebook-835-g7"],
        price: 650_000,
        features: &[
            "Fast performance for multitasking",
            "Great for presentations",
            "Online learning ready",
            "Video call capable",
            "Solid build quality",
            "9 months warranty",
        ],
        badge: "Best Value",
    },
    SeedPackage {
        id: "programming-design",
        tier: PackageTier::ProgrammingDesign,
        title: "Programming & Design Pro",
        subtitle: "For IT, Engineering & Creative Students",
        laptops: &["hp-elitebook-845-g8-r7", "surface-laptop-4", "hp-elitebook-1040-g8"],
        price: 1_200_000,
        features: &[
            "Powerful processors",
            "16GB RAM for heavy tasks",
            "Large SSD storage",
            "Great for coding & design software",
            "Professional build quality",
            "12 months warranty",
        ],
        badge: "Premium Choice",
    },
];

pub fn product_records() -> Vec<ProductRecord> {
    SEED_PRODUCTS.iter().map(ProductRecord::from).collect()
}

pub fn package_records() -> Vec<PackageRecord> {
    SEED_PACKAGES.iter().map(PackageRecord::from).collect()
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

impl From<&SeedProduct> for ProductRecord {
    fn from(seed: &SeedProduct) -> Self {
        Self {
            id: seed.id.to_owned(),
            name: seed.name.to_owned(),
            brand: seed.brand.to_owned(),
            price: seed.price,
            original_price: None,
            condition: seed.condition,
            specs: SpecsRecord {
                processor: seed.processor.to_owned(),
                ram: seed.ram.to_owned(),
                storage: seed.storage.to_owned(),
                screen: seed.screen.to_owned(),
                graphics: Some(seed.graphics.to_owned()),
            },
            features: owned(seed.features),
            in_stock: true,
            use_cases: seed.use_cases.to_vec(),
            category: Some(seed.category),
            badge: seed.badge,
        }
    }
}

impl From<&SeedPackage> for PackageRecord {
    fn from(seed: &SeedPackage) -> Self {
        Self {
            id: seed.id.to_owned(),
            tier: seed.tier,
            title: seed.title.to_owned(),
            subtitle: seed.subtitle.to_owned(),
            laptops: owned(seed.laptops),
            price: seed.price,
            features: owned(seed.features),
            badge: Some(seed.badge.to_owned()),
        }
    }
}
