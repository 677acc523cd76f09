mod dummy_shop_server;

pub use self::dummy_shop_server::{DummyShopServer, ShopRequest, ShopState};
