//! # Built-in Theme Database

use super::Theme;

/// The themes shipped with the engine, in display order.
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme::new(
            "Animals",
            "Living Creatures",
            &[
                "CAT", "DOG", "BIRD", "FISH", "BEAR", "WOLF", "LION", "TIGER", "MOUSE", "HORSE",
                "SHEEP", "GOAT", "DUCK", "FROG", "SNAKE",
            ],
            &[
                "TREE", "ROCK", "BOOK", "CHAIR", "TABLE", "PHONE", "WATER", "FIRE", "WIND",
                "CLOUD", "STAR", "MOON", "SUN", "RAIN",
            ],
        ),
        Theme::new(
            "Colors",
            "Visual Spectrum",
            &[
                "RED", "BLUE", "GREEN", "YELLOW", "BLACK", "WHITE", "PINK", "BROWN", "GRAY",
                "ORANGE", "PURPLE", "GOLD", "SILVER",
            ],
            &[
                "HOUSE", "TREE", "BOOK", "MUSIC", "DANCE", "SPORT", "GAME", "FOOD", "DRINK",
                "PLANT", "STONE", "METAL", "WOOD",
            ],
        ),
        Theme::new(
            "Food",
            "Edible Items",
            &[
                "APPLE", "BREAD", "CHEESE", "FISH", "MEAT", "RICE", "PASTA", "PIZZA", "CAKE",
                "MILK", "WATER", "JUICE", "SOUP", "SALAD",
            ],
            &[
                "CHAIR", "TABLE", "BOOK", "PHONE", "MUSIC", "DANCE", "SPORT", "TREE", "FLOWER",
                "STONE", "METAL", "GLASS", "PAPER",
            ],
        ),
        Theme::new(
            "Sports",
            "Athletic Activities",
            &[
                "SOCCER", "TENNIS", "GOLF", "SWIM", "RUN", "JUMP", "BIKE", "SKATE", "SURF",
                "CLIMB", "DANCE", "YOGA", "BOXING",
            ],
            &[
                "BOOK", "MUSIC", "FOOD", "HOUSE", "TREE", "FLOWER", "WATER", "FIRE", "STONE",
                "METAL", "GLASS", "PAPER", "CLOTH",
            ],
        ),
        Theme::new(
            "Nature",
            "Natural World",
            &[
                "TREE", "FLOWER", "GRASS", "ROCK", "WATER", "FIRE", "WIND", "CLOUD", "RAIN",
                "SNOW", "SUN", "MOON", "STAR", "OCEAN",
            ],
            &[
                "HOUSE", "CAR", "PHONE", "BOOK", "MUSIC", "DANCE", "SPORT", "FOOD", "CHAIR",
                "TABLE", "GLASS", "METAL", "PAPER",
            ],
        ),
    ]
}
