//! Site-wide constants: storage keys and the wallet brands the page promotes.

pub const THEME_STORAGE_KEY: &str = "wbb-theme";
pub const LANG_STORAGE_KEY: &str = "lang";

pub struct WalletBrand {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub chains: &'static str,
}

pub const WALLET_BRANDS: [WalletBrand; 3] = [
    WalletBrand {
        name: "MetaMask",
        color: "#F6851B",
        icon: "fab fa-ethereum",
        chains: "Ethereum / EVM",
    },
    WalletBrand {
        name: "Phantom",
        color: "#5341F5",
        icon: "fas fa-ghost",
        chains: "Solana",
    },
    WalletBrand {
        name: "Trust Wallet",
        color: "#3375BB",
        icon: "fas fa-shield-halved",
        chains: "Multi-chain",
    },
];
