//! Static object and drop tables compiled into the crate.
//!
//! `OBJECTS` is ordered: the 1.6 cart shuffle walks it front to back and
//! draws a key for every entry, so the order itself is load-bearing.
//! Edit the catalog data, not the derived tables.

use crate::predictor::geode::GeodeKind;
use crate::version::GameVersion;

/// One object catalog entry.
#[derive(Clone, Copy, Debug)]
pub struct ObjectEntry {
    pub id: i32,
    pub name: &'static str,
    pub price: i32,
    pub category: i32,
    /// Never sold by the traveling cart (quest rewards, legendaries).
    pub offlimits: bool,
    /// Arch, Minerals and Quest types are skipped by the 1.6 cart walk.
    pub type_excluded: bool,
    /// First version this object exists in.
    pub added: GameVersion,
}

impl ObjectEntry {
    const fn new(
        id: i32,
        name: &'static str,
        price: i32,
        category: i32,
        offlimits: bool,
        type_excluded: bool,
        added: GameVersion,
    ) -> Self {
        Self { id, name, price, category, offlimits, type_excluded, added }
    }
}

pub static OBJECTS: [ObjectEntry; 477] = [
    ObjectEntry::new(16, "Wild Horseradish", 50, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(18, "Daffodil", 30, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(20, "Leek", 60, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(22, "Dandelion", 40, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(24, "Parsnip", 35, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(60, "Emerald", 250, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(62, "Aquamarine", 180, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(64, "Ruby", 250, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(66, "Amethyst", 100, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(68, "Topaz", 80, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(69, "Banana Sapling", 850, -74, false, false, GameVersion::V1_5),
    ObjectEntry::new(70, "Jade", 200, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(72, "Diamond", 750, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(74, "Prismatic Shard", 2000, -2, true, true, GameVersion::V1_3),
    ObjectEntry::new(78, "Cave Carrot", 25, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(79, "Secret Note", 1, 0, true, true, GameVersion::V1_3),
    ObjectEntry::new(80, "Quartz", 25, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(82, "Fire Quartz", 100, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(84, "Frozen Tear", 75, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(86, "Earth Crystal", 50, -2, false, true, GameVersion::V1_3),
    ObjectEntry::new(88, "Coconut", 100, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(90, "Cactus Fruit", 75, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(92, "Sap", 2, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(96, "Dwarf Scroll I", 1, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(97, "Dwarf Scroll II", 1, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(98, "Dwarf Scroll III", 1, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(99, "Dwarf Scroll IV", 1, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(100, "Chipped Amphora", 40, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(101, "Arrowhead", 40, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(102, "Lost Book", 50, 0, true, false, GameVersion::V1_3),
    ObjectEntry::new(103, "Ancient Doll", 60, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(104, "Elvish Jewelry", 200, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(105, "Chewing Stick", 50, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(106, "Ornamental Fan", 300, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(107, "Dinosaur Egg", 350, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(108, "Rare Disc", 300, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(109, "Ancient Sword", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(110, "Rusty Spoon", 25, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(111, "Rusty Spur", 25, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(112, "Rusty Cog", 25, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(113, "Chicken Statue", 50, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(114, "Ancient Seed", 5, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(115, "Prehistoric Tool", 50, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(116, "Dried Starfish", 40, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(117, "Anchor", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(118, "Glass Shards", 20, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(119, "Bone Flute", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(120, "Prehistoric Handaxe", 50, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(121, "Dwarvish Helm", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(122, "Dwarf Gadget", 200, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(123, "Ancient Drum", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(124, "Golden Mask", 500, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(125, "Golden Relic", 250, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(126, "Strange Doll (green)", 1000, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(127, "Strange Doll (yellow)", 1000, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(128, "Pufferfish", 200, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(129, "Anchovy", 30, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(130, "Tuna", 100, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(131, "Sardine", 40, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(132, "Bream", 45, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(136, "Largemouth Bass", 100, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(137, "Smallmouth Bass", 50, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(138, "Rainbow Trout", 65, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(139, "Salmon", 75, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(140, "Walleye", 105, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(141, "Perch", 55, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(142, "Carp", 30, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(143, "Catfish", 200, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(144, "Pike", 100, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(145, "Sunfish", 30, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(146, "Red Mullet", 75, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(147, "Herring", 30, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(148, "Eel", 85, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(149, "Octopus", 150, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(150, "Red Snapper", 50, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(151, "Squid", 80, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(152, "Seaweed", 20, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(153, "Green Algae", 15, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(154, "Sea Cucumber", 75, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(155, "Super Cucumber", 250, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(156, "Ghostfish", 45, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(157, "White Algae", 25, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(158, "Stonefish", 300, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(159, "Crimsonfish", 1500, -4, true, false, GameVersion::V1_3),
    ObjectEntry::new(160, "Angler", 900, -4, true, false, GameVersion::V1_3),
    ObjectEntry::new(161, "Ice Pip", 500, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(162, "Lava Eel", 700, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(163, "Legend", 5000, -4, true, false, GameVersion::V1_3),
    ObjectEntry::new(164, "Sandfish", 75, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(165, "Scorpion Carp", 150, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(166, "Treasure Chest", 5000, 0, true, false, GameVersion::V1_3),
    ObjectEntry::new(167, "Joja Cola", 25, -20, false, false, GameVersion::V1_3),
    ObjectEntry::new(168, "Trash", 0, -20, false, false, GameVersion::V1_3),
    ObjectEntry::new(169, "Driftwood", 0, -20, false, false, GameVersion::V1_3),
    ObjectEntry::new(170, "Broken Glasses", 0, -20, false, false, GameVersion::V1_3),
    ObjectEntry::new(171, "Broken CD", 0, -20, false, false, GameVersion::V1_3),
    ObjectEntry::new(172, "Soggy Newspaper", 0, -20, false, false, GameVersion::V1_3),
    ObjectEntry::new(174, "Large Egg", 95, -5, false, false, GameVersion::V1_3),
    ObjectEntry::new(176, "Egg", 50, -5, false, false, GameVersion::V1_3),
    ObjectEntry::new(178, "Hay", 0, 0, true, false, GameVersion::V1_3),
    ObjectEntry::new(180, "Egg (brown)", 50, -5, false, false, GameVersion::V1_3),
    ObjectEntry::new(182, "Large Egg (brown)", 95, -5, false, false, GameVersion::V1_3),
    ObjectEntry::new(184, "Milk", 125, -6, false, false, GameVersion::V1_3),
    ObjectEntry::new(186, "Large Milk", 190, -6, false, false, GameVersion::V1_3),
    ObjectEntry::new(188, "Green Bean", 40, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(190, "Cauliflower", 175, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(192, "Potato", 80, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(194, "Fried Egg", 35, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(195, "Omelet", 125, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(196, "Salad", 110, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(197, "Cheese Cauliflower", 300, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(198, "Baked Fish", 100, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(199, "Parsnip Soup", 120, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(200, "Vegetable Medley", 120, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(201, "Complete Breakfast", 350, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(202, "Fried Calamari", 150, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(203, "Strange Bun", 225, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(204, "Lucky Lunch", 250, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(205, "Fried Mushroom", 200, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(206, "Pizza", 300, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(207, "Bean Hotpot", 100, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(208, "Glazed Yams", 200, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(209, "Carp Surprise", 150, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(210, "Hashbrowns", 120, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(211, "Pancakes", 80, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(212, "Salmon Dinner", 300, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(213, "Fish Taco", 500, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(214, "Crispy Bass", 150, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(215, "Pepper Poppers", 200, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(216, "Bread", 60, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(217, "Tom Kha Soup", 250, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(218, "Trout Soup", 100, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(219, "Chocolate Cake", 200, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(220, "Pink Cake", 480, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(221, "Rhubarb Pie", 400, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(222, "Cookie", 140, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(223, "Spaghetti", 120, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(224, "Fried Eel", 120, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(225, "Spicy Eel", 175, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(226, "Sashimi", 75, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(227, "Maki Roll", 220, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(228, "Tortilla", 50, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(229, "Red Plate", 400, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(230, "Eggplant Parmesan", 200, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(231, "Rice Pudding", 260, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(232, "Ice Cream", 120, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(233, "Blueberry Tart", 150, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(234, "Autumn's Bounty", 350, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(235, "Pumpkin Soup", 300, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(236, "Super Meal", 220, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(237, "Cranberry Sauce", 120, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(238, "Stuffing", 165, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(239, "Farmer's Lunch", 150, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(240, "Survival Burger", 180, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(241, "Dish O' The Sea", 220, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(242, "Miner's Treat", 200, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(243, "Roots Platter", 100, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(245, "Sugar", 50, -17, false, false, GameVersion::V1_3),
    ObjectEntry::new(246, "Wheat Flour", 50, -17, false, false, GameVersion::V1_3),
    ObjectEntry::new(247, "Oil", 100, -17, false, false, GameVersion::V1_3),
    ObjectEntry::new(248, "Garlic", 60, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(250, "Kale", 110, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(252, "Rhubarb", 220, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(254, "Melon", 250, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(256, "Tomato", 60, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(257, "Morel", 150, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(258, "Blueberry", 50, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(259, "Fiddlehead Fern", 90, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(260, "Hot Pepper", 40, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(262, "Wheat", 25, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(264, "Radish", 90, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(266, "Red Cabbage", 260, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(268, "Starfruit", 750, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(270, "Corn", 50, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(272, "Eggplant", 60, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(274, "Artichoke", 160, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(276, "Pumpkin", 320, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(278, "Bok Choy", 80, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(280, "Yam", 160, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(281, "Chanterelle", 160, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(282, "Cranberries", 75, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(283, "Holly", 80, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(284, "Beet", 100, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(286, "Cherry Bomb", 50, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(287, "Bomb", 50, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(288, "Mega Bomb", 50, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(292, "Mahogany Seed", 100, -74, false, false, GameVersion::V1_5),
    ObjectEntry::new(296, "Salmonberry", 5, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(298, "Hardwood Fence", 10, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(299, "Amaranth Seeds", 35, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(300, "Amaranth", 150, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(301, "Grape Starter", 30, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(302, "Hops Starter", 30, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(303, "Pale Ale", 300, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(304, "Hops", 25, -75, false, false, GameVersion::V1_3),
    ObjectEntry::new(305, "Void Egg", 65, -5, false, false, GameVersion::V1_3),
    ObjectEntry::new(306, "Mayonnaise", 190, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(307, "Duck Mayonnaise", 375, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(308, "Void Mayonnaise", 275, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(309, "Acorn", 20, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(310, "Maple Seed", 5, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(311, "Pine Cone", 5, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(322, "Wood Fence", 1, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(323, "Stone Fence", 2, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(324, "Iron Fence", 6, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(325, "Gate", 4, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(328, "Wood Floor", 1, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(329, "Stone Floor", 1, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(330, "Clay", 20, -16, false, false, GameVersion::V1_3),
    ObjectEntry::new(331, "Weathered Floor", 1, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(333, "Crystal Floor", 1, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(334, "Copper Bar", 60, -15, false, false, GameVersion::V1_3),
    ObjectEntry::new(335, "Iron Bar", 120, -15, false, false, GameVersion::V1_3),
    ObjectEntry::new(336, "Gold Bar", 250, -15, false, false, GameVersion::V1_3),
    ObjectEntry::new(337, "Iridium Bar", 1000, -15, false, false, GameVersion::V1_3),
    ObjectEntry::new(338, "Refined Quartz", 50, -15, false, false, GameVersion::V1_3),
    ObjectEntry::new(340, "Honey", 100, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(341, "Tea Set", 200, 0, true, false, GameVersion::V1_3),
    ObjectEntry::new(342, "Pickles", 100, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(344, "Jelly", 160, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(346, "Beer", 200, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(347, "Rare Seed", 200, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(348, "Wine", 400, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(350, "Juice", 150, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(368, "Basic Fertilizer", 2, -19, false, false, GameVersion::V1_3),
    ObjectEntry::new(369, "Quality Fertilizer", 10, -19, false, false, GameVersion::V1_3),
    ObjectEntry::new(370, "Basic Retaining Soil", 4, -19, false, false, GameVersion::V1_3),
    ObjectEntry::new(371, "Quality Retaining Soil", 5, -19, false, false, GameVersion::V1_3),
    ObjectEntry::new(372, "Clam", 50, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(373, "Golden Pumpkin", 2500, 0, true, false, GameVersion::V1_3),
    ObjectEntry::new(376, "Poppy", 140, -80, false, false, GameVersion::V1_3),
    ObjectEntry::new(378, "Copper Ore", 5, -15, false, false, GameVersion::V1_3),
    ObjectEntry::new(380, "Iron Ore", 10, -15, false, false, GameVersion::V1_3),
    ObjectEntry::new(382, "Coal", 15, -15, false, false, GameVersion::V1_3),
    ObjectEntry::new(384, "Gold Ore", 25, -15, false, false, GameVersion::V1_3),
    ObjectEntry::new(386, "Iridium Ore", 100, -15, false, false, GameVersion::V1_3),
    ObjectEntry::new(388, "Wood", 2, -16, false, false, GameVersion::V1_3),
    ObjectEntry::new(390, "Stone", 2, -999, false, false, GameVersion::V1_3),
    ObjectEntry::new(392, "Nautilus Shell", 120, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(393, "Coral", 80, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(394, "Rainbow Shell", 300, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(396, "Spice Berry", 80, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(397, "Sea Urchin", 160, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(398, "Grape", 80, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(399, "Spring Onion", 8, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(400, "Strawberry", 120, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(402, "Sweet Pea", 50, -80, false, false, GameVersion::V1_3),
    ObjectEntry::new(404, "Common Mushroom", 40, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(406, "Wild Plum", 80, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(408, "Hazelnut", 90, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(410, "Blackberry", 20, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(412, "Winter Root", 70, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(414, "Crystal Fruit", 150, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(416, "Snow Yam", 100, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(417, "Sweet Gem Berry", 3000, -17, true, false, GameVersion::V1_3),
    ObjectEntry::new(418, "Crocus", 60, -80, false, false, GameVersion::V1_3),
    ObjectEntry::new(420, "Red Mushroom", 75, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(421, "Sunflower", 80, -80, false, false, GameVersion::V1_3),
    ObjectEntry::new(422, "Purple Mushroom", 250, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(423, "Rice", 100, -17, false, false, GameVersion::V1_3),
    ObjectEntry::new(424, "Cheese", 230, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(426, "Goat Cheese", 400, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(428, "Cloth", 470, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(430, "Truffle", 625, -81, false, false, GameVersion::V1_3),
    ObjectEntry::new(432, "Truffle Oil", 1065, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(433, "Coffee Bean", 15, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(436, "Goat Milk", 225, -6, false, false, GameVersion::V1_3),
    ObjectEntry::new(438, "L. Goat Milk", 345, -6, false, false, GameVersion::V1_3),
    ObjectEntry::new(440, "Wool", 340, -18, false, false, GameVersion::V1_3),
    ObjectEntry::new(442, "Duck Egg", 95, -5, false, false, GameVersion::V1_3),
    ObjectEntry::new(444, "Duck Feather", 250, -18, false, false, GameVersion::V1_3),
    ObjectEntry::new(446, "Rabbit's Foot", 565, -18, false, false, GameVersion::V1_3),
    ObjectEntry::new(453, "Poppy Seeds", 50, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(455, "Spangle Seeds", 25, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(456, "Algae Soup", 100, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(457, "Pale Broth", 150, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(459, "Mead", 200, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(465, "Speed-Gro", 20, -19, false, false, GameVersion::V1_3),
    ObjectEntry::new(466, "Deluxe Speed-Gro", 40, -19, false, false, GameVersion::V1_3),
    ObjectEntry::new(472, "Parsnip Seeds", 10, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(473, "Bean Starter", 30, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(474, "Cauliflower Seeds", 40, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(475, "Potato Seeds", 25, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(476, "Garlic Seeds", 20, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(477, "Kale Seeds", 35, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(478, "Rhubarb Seeds", 50, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(479, "Melon Seeds", 40, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(480, "Tomato Seeds", 25, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(481, "Blueberry Seeds", 40, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(482, "Pepper Seeds", 20, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(483, "Wheat Seeds", 5, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(484, "Radish Seeds", 20, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(485, "Red Cabbage Seeds", 50, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(486, "Starfruit Seeds", 200, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(487, "Corn Seeds", 75, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(488, "Eggplant Seeds", 10, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(489, "Artichoke Seeds", 15, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(490, "Pumpkin Seeds", 50, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(491, "Bok Choy Seeds", 25, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(492, "Yam Seeds", 30, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(493, "Cranberry Seeds", 120, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(494, "Beet Seeds", 10, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(495, "Spring Seeds", 35, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(496, "Summer Seeds", 55, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(497, "Fall Seeds", 45, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(498, "Winter Seeds", 30, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(499, "Ancient Seeds", 30, -74, true, false, GameVersion::V1_3),
    ObjectEntry::new(535, "Geode", 50, 0, true, false, GameVersion::V1_3),
    ObjectEntry::new(536, "Frozen Geode", 100, 0, true, false, GameVersion::V1_3),
    ObjectEntry::new(537, "Magma Geode", 150, 0, true, false, GameVersion::V1_3),
    ObjectEntry::new(538, "Alamite", 150, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(539, "Bixite", 300, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(540, "Baryte", 50, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(541, "Aerinite", 125, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(542, "Calcite", 75, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(543, "Dolomite", 300, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(544, "Esperite", 100, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(545, "Fluorapatite", 200, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(546, "Geminite", 150, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(547, "Helvite", 450, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(548, "Jamborite", 150, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(549, "Jagoite", 115, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(550, "Kyanite", 250, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(551, "Lunarite", 200, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(552, "Malachite", 100, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(553, "Neptunite", 400, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(554, "Lemon Stone", 200, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(555, "Nekoite", 80, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(556, "Orpiment", 80, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(557, "Petrified Slime", 120, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(558, "Thunder Egg", 100, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(559, "Pyrite", 120, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(560, "Ocean Stone", 220, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(561, "Ghost Crystal", 200, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(562, "Tigerseye", 275, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(563, "Jasper", 150, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(564, "Opal", 150, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(565, "Fire Opal", 350, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(566, "Celestine", 125, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(567, "Marble", 110, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(568, "Sandstone", 60, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(569, "Granite", 75, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(570, "Basalt", 175, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(571, "Limestone", 15, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(572, "Soapstone", 120, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(573, "Hematite", 150, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(574, "Mudstone", 25, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(575, "Obsidian", 200, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(576, "Slate", 85, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(577, "Fairy Stone", 250, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(578, "Star Shards", 500, -12, false, true, GameVersion::V1_3),
    ObjectEntry::new(579, "Prehistoric Scapula", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(580, "Prehistoric Tibia", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(581, "Prehistoric Skull", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(582, "Skeletal Hand", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(583, "Prehistoric Rib", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(584, "Prehistoric Vertebra", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(585, "Skeletal Tail", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(586, "Nautilus Fossil", 80, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(587, "Amphibian Fossil", 150, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(588, "Palm Fossil", 100, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(589, "Trilobite", 50, 0, false, true, GameVersion::V1_3),
    ObjectEntry::new(591, "Tulip", 30, -80, false, false, GameVersion::V1_3),
    ObjectEntry::new(593, "Summer Spangle", 90, -80, false, false, GameVersion::V1_3),
    ObjectEntry::new(595, "Fairy Rose", 290, -80, false, false, GameVersion::V1_3),
    ObjectEntry::new(597, "Blue Jazz", 50, -80, false, false, GameVersion::V1_3),
    ObjectEntry::new(599, "Sprinkler", 100, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(604, "Plum Pudding", 260, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(605, "Artichoke Dip", 210, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(606, "Stir Fry", 335, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(607, "Roasted Hazelnuts", 270, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(608, "Pumpkin Pie", 385, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(609, "Radish Salad", 300, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(610, "Fruit Salad", 450, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(611, "Blackberry Cobbler", 260, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(612, "Cranberry Candy", 175, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(613, "Apple", 100, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(614, "Green Tea", 100, -26, false, false, GameVersion::V1_3),
    ObjectEntry::new(618, "Bruschetta", 210, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(621, "Quality Sprinkler", 450, -8, false, false, GameVersion::V1_3),
    ObjectEntry::new(628, "Cherry Sapling", 850, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(629, "Apricot Sapling", 500, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(630, "Orange Sapling", 1000, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(631, "Peach Sapling", 1500, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(632, "Pomegranate Sapling", 1500, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(633, "Apple Sapling", 1000, -74, false, false, GameVersion::V1_3),
    ObjectEntry::new(634, "Apricot", 50, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(635, "Orange", 100, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(636, "Peach", 140, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(637, "Pomegranate", 140, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(638, "Cherry", 80, -79, false, false, GameVersion::V1_3),
    ObjectEntry::new(648, "Coleslaw", 345, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(649, "Fiddlehead Risotto", 350, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(651, "Poppyseed Muffin", 250, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(684, "Bug Meat", 8, -28, false, false, GameVersion::V1_3),
    ObjectEntry::new(685, "Bait", 1, -21, false, false, GameVersion::V1_3),
    ObjectEntry::new(686, "Spinner", 250, -22, false, false, GameVersion::V1_3),
    ObjectEntry::new(687, "Dressed Spinner", 500, -22, false, false, GameVersion::V1_3),
    ObjectEntry::new(691, "Barbed Hook", 500, -22, false, false, GameVersion::V1_3),
    ObjectEntry::new(692, "Lead Bobber", 150, -22, false, false, GameVersion::V1_3),
    ObjectEntry::new(693, "Treasure Hunter", 250, -22, false, false, GameVersion::V1_3),
    ObjectEntry::new(694, "Trap Bobber", 200, -22, false, false, GameVersion::V1_3),
    ObjectEntry::new(695, "Cork Bobber", 250, -22, false, false, GameVersion::V1_3),
    ObjectEntry::new(698, "Sturgeon", 200, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(699, "Tiger Trout", 150, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(700, "Bullhead", 75, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(701, "Tilapia", 75, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(702, "Chub", 50, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(703, "Magnet", 15, -21, false, false, GameVersion::V1_3),
    ObjectEntry::new(704, "Dorado", 100, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(705, "Albacore", 75, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(706, "Shad", 60, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(707, "Lingcod", 120, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(708, "Halibut", 80, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(709, "Hardwood", 15, -16, false, false, GameVersion::V1_3),
    ObjectEntry::new(715, "Lobster", 120, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(716, "Crayfish", 75, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(717, "Crab", 100, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(718, "Cockle", 50, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(719, "Mussel", 30, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(720, "Shrimp", 60, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(721, "Snail", 65, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(722, "Periwinkle", 20, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(723, "Oyster", 40, -23, false, false, GameVersion::V1_3),
    ObjectEntry::new(724, "Maple Syrup", 200, -27, false, false, GameVersion::V1_3),
    ObjectEntry::new(725, "Oak Resin", 150, -27, false, false, GameVersion::V1_3),
    ObjectEntry::new(726, "Pine Tar", 100, -27, false, false, GameVersion::V1_3),
    ObjectEntry::new(727, "Chowder", 135, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(728, "Fish Stew", 175, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(729, "Escargot", 125, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(730, "Lobster Bisque", 205, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(731, "Maple Bar", 300, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(732, "Crab Cakes", 275, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(733, "Shrimp Cocktail", 160, -7, false, false, GameVersion::V1_3),
    ObjectEntry::new(734, "Woodskip", 75, -4, false, false, GameVersion::V1_3),
    ObjectEntry::new(766, "Slime", 5, -28, false, false, GameVersion::V1_3),
    ObjectEntry::new(767, "Bat Wing", 15, -28, false, false, GameVersion::V1_3),
    ObjectEntry::new(768, "Solar Essence", 40, -28, false, false, GameVersion::V1_3),
    ObjectEntry::new(769, "Void Essence", 50, -28, false, false, GameVersion::V1_3),
    ObjectEntry::new(771, "Fiber", 1, -16, false, false, GameVersion::V1_3),
    ObjectEntry::new(787, "Battery Pack", 500, -16, false, false, GameVersion::V1_3),
    ObjectEntry::new(814, "Squid Ink", 110, -23, false, false, GameVersion::V1_5),
    ObjectEntry::new(815, "Tea Leaves", 50, -75, false, false, GameVersion::V1_5),
    ObjectEntry::new(820, "Fossilized Skull", 100, 0, false, true, GameVersion::V1_5),
    ObjectEntry::new(821, "Fossilized Spine", 100, 0, false, true, GameVersion::V1_5),
    ObjectEntry::new(822, "Fossilized Tail", 100, 0, false, true, GameVersion::V1_5),
    ObjectEntry::new(823, "Fossilized Leg", 100, 0, false, true, GameVersion::V1_5),
    ObjectEntry::new(824, "Fossilized Ribs", 100, 0, false, true, GameVersion::V1_5),
    ObjectEntry::new(825, "Snake Skull", 100, 0, false, true, GameVersion::V1_5),
    ObjectEntry::new(829, "Ginger", 60, -81, false, false, GameVersion::V1_5),
    ObjectEntry::new(830, "Taro Root", 100, -75, false, false, GameVersion::V1_5),
    ObjectEntry::new(831, "Taro Tuber", 8, -74, false, false, GameVersion::V1_5),
    ObjectEntry::new(832, "Pineapple", 300, -79, false, false, GameVersion::V1_5),
    ObjectEntry::new(833, "Pineapple Seeds", 100, -74, false, false, GameVersion::V1_5),
    ObjectEntry::new(834, "Mango", 130, -79, false, false, GameVersion::V1_5),
    ObjectEntry::new(835, "Mango Sapling", 2000, -74, false, false, GameVersion::V1_5),
    ObjectEntry::new(836, "Stingray", 180, -4, false, false, GameVersion::V1_5),
    ObjectEntry::new(837, "Lionfish", 100, -4, false, false, GameVersion::V1_5),
    ObjectEntry::new(838, "Blue Discus", 120, -4, false, false, GameVersion::V1_5),
    ObjectEntry::new(848, "Cinder Shard", 50, -15, false, false, GameVersion::V1_5),
    ObjectEntry::new(851, "Magma Cap", 400, -81, false, false, GameVersion::V1_5),
    ObjectEntry::new(852, "Dragon Tooth", 500, -28, false, false, GameVersion::V1_5),
    ObjectEntry::new(856, "Curiosity Lure", 500, -22, false, false, GameVersion::V1_5),
    ObjectEntry::new(881, "Bone Fragment", 12, -15, false, false, GameVersion::V1_5),
    ObjectEntry::new(890, "Qi Bean", 1, -74, true, false, GameVersion::V1_5),
    ObjectEntry::new(909, "Radioactive Ore", 300, -15, false, false, GameVersion::V1_5),
    ObjectEntry::new(910, "Radioactive Bar", 3000, -15, false, false, GameVersion::V1_5),
    ObjectEntry::new(943, "Wild Carrot", 35, -75, false, false, GameVersion::V1_6),
    ObjectEntry::new(944, "Summer Squash", 45, -75, false, false, GameVersion::V1_6),
    ObjectEntry::new(945, "Broccoli", 70, -75, false, false, GameVersion::V1_6),
    ObjectEntry::new(946, "Powdermelon", 60, -79, false, false, GameVersion::V1_6),
    ObjectEntry::new(947, "Carrot Seeds", 5, -74, false, false, GameVersion::V1_6),
    ObjectEntry::new(948, "Summer Squash Seeds", 5, -74, false, false, GameVersion::V1_6),
    ObjectEntry::new(949, "Broccoli Seeds", 15, -74, false, false, GameVersion::V1_6),
    ObjectEntry::new(950, "Powdermelon Seeds", 20, -74, false, false, GameVersion::V1_6),
    ObjectEntry::new(951, "Moss", 5, -16, false, false, GameVersion::V1_6),
    ObjectEntry::new(952, "Mystic Syrup", 1000, -27, false, false, GameVersion::V1_6),
];

/// Catalog lookup by id.
pub fn object(id: i32) -> Option<&'static ObjectEntry> {
    OBJECTS.iter().find(|e| e.id == id)
}

pub fn object_name(id: i32) -> &'static str {
    object(id).map(|e| e.name).unwrap_or("(unknown)")
}

/// Ids the 1.4/1.5 cart may sell, sorted for binary search.
pub static CART_ITEMS_1_4: [i32; 324] = [
    16, 18, 20, 22, 24, 78, 88, 90, 92, 128, 129, 130,
    131, 132, 136, 137, 138, 139, 140, 141, 142, 143, 144, 145,
    146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157,
    158, 161, 162, 164, 165, 167, 174, 176, 180, 182, 184, 186,
    188, 190, 192, 194, 195, 196, 197, 198, 199, 200, 201, 202,
    203, 204, 205, 206, 207, 208, 209, 210, 211, 212, 213, 214,
    215, 216, 217, 218, 219, 220, 221, 222, 223, 224, 225, 226,
    227, 228, 229, 230, 231, 232, 233, 234, 235, 236, 237, 238,
    239, 240, 241, 242, 243, 245, 246, 247, 248, 250, 252, 254,
    256, 257, 258, 259, 260, 262, 264, 266, 268, 270, 272, 274,
    276, 278, 280, 281, 282, 283, 284, 286, 287, 288, 296, 298,
    299, 300, 301, 302, 303, 304, 305, 306, 307, 308, 309, 310,
    311, 322, 323, 324, 325, 328, 329, 330, 331, 333, 334, 335,
    336, 337, 338, 340, 342, 344, 346, 347, 348, 350, 368, 369,
    370, 371, 372, 376, 378, 380, 382, 384, 386, 388, 392, 393,
    394, 396, 397, 398, 399, 400, 402, 404, 406, 408, 410, 412,
    414, 416, 418, 420, 421, 422, 423, 424, 426, 428, 430, 432,
    433, 436, 438, 440, 442, 444, 446, 453, 455, 456, 457, 459,
    465, 466, 472, 473, 474, 475, 476, 477, 478, 479, 480, 481,
    482, 483, 484, 485, 486, 487, 488, 489, 490, 491, 492, 493,
    494, 495, 496, 497, 498, 591, 593, 595, 597, 599, 604, 605,
    606, 607, 608, 609, 610, 611, 612, 613, 614, 618, 621, 628,
    629, 630, 631, 632, 633, 634, 635, 636, 637, 638, 648, 649,
    651, 684, 685, 686, 687, 691, 692, 693, 694, 695, 698, 699,
    700, 701, 702, 703, 704, 705, 706, 707, 708, 709, 715, 716,
    717, 718, 719, 720, 721, 722, 723, 724, 725, 726, 727, 728,
    729, 730, 731, 732, 733, 734, 766, 767, 768, 769, 771, 787,
];

/// Pre-1.4 cart roll resolution: index `roll - 2` for rolls in 2..790.
pub static CART_ROLL_TO_ID_PRE14: [i32; 788] = [
    16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
    16, 16, 16, 18, 18, 20, 20, 22, 22, 24, 24, 60,
    60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60,
    60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60,
    60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 62,
    62, 64, 64, 66, 66, 68, 68, 70, 70, 72, 72, 78,
    78, 78, 78, 78, 78, 80, 80, 82, 82, 84, 84, 86,
    86, 88, 88, 90, 90, 92, 92, 128, 128, 128, 128, 128,
    128, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128,
    128, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128,
    128, 128, 128, 128, 128, 128, 128, 129, 130, 131, 132, 136,
    136, 136, 136, 137, 138, 139, 140, 141, 142, 143, 144, 145,
    146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157,
    158, 161, 161, 161, 162, 164, 164, 165, 167, 167, 174, 174,
    174, 174, 174, 174, 174, 176, 176, 180, 180, 180, 180, 182,
    182, 184, 184, 186, 186, 188, 188, 190, 190, 192, 192, 194,
    194, 195, 196, 197, 198, 199, 200, 201, 202, 203, 204, 205,
    206, 207, 208, 209, 210, 211, 212, 213, 214, 215, 216, 217,
    218, 219, 220, 221, 222, 223, 224, 225, 226, 227, 228, 229,
    230, 231, 232, 233, 234, 235, 236, 237, 238, 239, 240, 241,
    242, 243, 245, 245, 246, 247, 248, 250, 250, 252, 252, 254,
    254, 256, 256, 257, 258, 259, 260, 262, 262, 264, 264, 266,
    266, 268, 268, 270, 270, 272, 272, 274, 274, 276, 276, 278,
    278, 280, 280, 281, 282, 283, 284, 286, 286, 287, 288, 296,
    296, 296, 296, 296, 296, 296, 296, 298, 298, 299, 300, 301,
    302, 303, 304, 305, 306, 307, 308, 309, 310, 311, 322, 322,
    322, 322, 322, 322, 322, 322, 322, 322, 322, 323, 324, 325,
    328, 328, 328, 329, 330, 331, 333, 333, 334, 335, 336, 337,
    338, 340, 340, 342, 342, 344, 344, 346, 346, 347, 348, 350,
    350, 368, 368, 368, 368, 368, 368, 368, 368, 368, 368, 368,
    368, 368, 368, 368, 368, 368, 368, 369, 370, 371, 372, 376,
    376, 376, 376, 378, 378, 380, 380, 382, 382, 384, 384, 386,
    386, 388, 388, 392, 392, 392, 392, 393, 394, 396, 396, 397,
    398, 399, 400, 402, 402, 404, 404, 406, 406, 408, 408, 410,
    410, 412, 412, 414, 414, 416, 416, 418, 418, 420, 420, 421,
    422, 423, 424, 426, 426, 428, 428, 430, 430, 432, 432, 433,
    436, 436, 436, 438, 438, 440, 440, 442, 442, 444, 444, 446,
    446, 453, 453, 453, 453, 453, 453, 453, 455, 455, 456, 457,
    459, 459, 465, 465, 465, 465, 465, 465, 466, 472, 472, 472,
    472, 472, 472, 473, 474, 475, 476, 477, 478, 479, 480, 481,
    482, 483, 484, 485, 486, 487, 488, 489, 490, 491, 492, 493,
    494, 495, 496, 497, 498, 538, 538, 538, 538, 538, 538, 538,
    538, 538, 538, 538, 538, 538, 538, 538, 538, 538, 538, 538,
    538, 538, 538, 538, 538, 538, 538, 538, 538, 538, 538, 538,
    538, 538, 538, 538, 538, 538, 538, 538, 538, 539, 540, 541,
    542, 543, 544, 545, 546, 547, 548, 549, 550, 551, 552, 553,
    554, 555, 556, 557, 558, 559, 560, 561, 562, 563, 564, 565,
    566, 567, 568, 569, 570, 571, 572, 573, 574, 575, 576, 577,
    578, 591, 591, 591, 591, 591, 591, 591, 591, 591, 591, 591,
    591, 591, 593, 593, 595, 595, 597, 597, 599, 599, 604, 604,
    604, 604, 604, 605, 606, 607, 608, 609, 610, 611, 612, 613,
    614, 618, 618, 618, 618, 621, 621, 621, 628, 628, 628, 628,
    628, 628, 628, 629, 630, 631, 632, 633, 634, 635, 636, 637,
    638, 648, 648, 648, 648, 648, 648, 648, 648, 648, 648, 649,
    651, 651, 684, 684, 684, 684, 684, 684, 684, 684, 684, 684,
    684, 684, 684, 684, 684, 684, 684, 684, 684, 684, 684, 684,
    684, 684, 684, 684, 684, 684, 684, 684, 684, 684, 684, 685,
    686, 687, 691, 691, 691, 691, 692, 693, 694, 695, 698, 698,
    698, 699, 700, 701, 702, 703, 704, 705, 706, 707, 708, 709,
    715, 715, 715, 715, 715, 715, 716, 717, 718, 719, 720, 721,
    722, 723, 724, 725, 726, 727, 728, 729, 730, 731, 732, 733,
    734, 766, 766, 766, 766, 766, 766, 766, 766, 766, 766, 766,
    766, 766, 766, 766, 766, 766, 766, 766, 766, 766, 766, 766,
    766, 766, 766, 766, 766, 766, 766, 766, 766, 767, 768, 769,
    771, 771, 787, 787, 787, 787, 787, 787, 787, 787, 787, 787,
    787, 787, 787, 787, 787, 787, 16, 16,
];

static GEODE_REGULAR: [(i32, i32); 15] = [
    (538, 1), (542, 1), (548, 1), (549, 1), (552, 1), (555, 1), (556, 1), (557, 1),
    (558, 1), (566, 1), (568, 1), (569, 1), (571, 1), (574, 1), (576, 1),
];

static GEODE_FROZEN: [(i32, i32); 13] = [
    (541, 1), (544, 1), (545, 1), (546, 1), (550, 1), (551, 1), (559, 1), (560, 1),
    (561, 1), (564, 1), (567, 1), (572, 1), (577, 1),
];

static GEODE_MAGMA: [(i32, i32); 12] = [
    (539, 1), (540, 1), (543, 1), (547, 1), (553, 1), (554, 1), (562, 1), (563, 1),
    (565, 1), (570, 1), (573, 1), (575, 1),
];

static GEODE_OMNI: [(i32, i32); 41] = [
    (538, 1), (542, 1), (548, 1), (549, 1), (552, 1), (555, 1), (556, 1), (557, 1),
    (558, 1), (566, 1), (568, 1), (569, 1), (571, 1), (574, 1), (576, 1), (541, 1),
    (544, 1), (545, 1), (546, 1), (550, 1), (551, 1), (559, 1), (560, 1), (561, 1),
    (564, 1), (567, 1), (572, 1), (577, 1), (539, 1), (540, 1), (543, 1), (547, 1),
    (553, 1), (554, 1), (562, 1), (563, 1), (565, 1), (570, 1), (573, 1), (575, 1),
    (578, 1),
];

static GEODE_OMNI_1_6: [(i32, i32); 42] = [
    (538, 1), (542, 1), (548, 1), (549, 1), (552, 1), (555, 1), (556, 1), (557, 1),
    (558, 1), (566, 1), (568, 1), (569, 1), (571, 1), (574, 1), (576, 1), (541, 1),
    (544, 1), (545, 1), (546, 1), (550, 1), (551, 1), (559, 1), (560, 1), (561, 1),
    (564, 1), (567, 1), (572, 1), (577, 1), (539, 1), (540, 1), (543, 1), (547, 1),
    (553, 1), (554, 1), (562, 1), (563, 1), (565, 1), (570, 1), (573, 1), (575, 1),
    (578, 1), (909, 1),
];

static GEODE_TROVE: [(i32, i32); 22] = [
    (100, 1), (101, 1), (103, 1), (104, 1), (105, 1), (106, 1), (108, 1), (109, 1),
    (110, 1), (111, 1), (112, 1), (113, 1), (114, 1), (115, 1), (116, 1), (117, 1),
    (118, 1), (119, 1), (120, 1), (121, 1), (122, 1), (123, 1),
];

static GEODE_COCONUT: [(i32, i32); 7] = [
    (831, 8), (833, 1), (835, 1), (69, 1), (292, 1), (386, 5), (820, 1),
];

/// Treasure table for a geode kind under a given version.
pub fn geode_treasures(kind: GeodeKind, version: GameVersion) -> &'static [(i32, i32)] {
    match kind {
        GeodeKind::Regular => &GEODE_REGULAR,
        GeodeKind::Frozen => &GEODE_FROZEN,
        GeodeKind::Magma => &GEODE_MAGMA,
        GeodeKind::Omni if version >= GameVersion::V1_6 => &GEODE_OMNI_1_6,
        GeodeKind::Omni => &GEODE_OMNI,
        GeodeKind::Trove => &GEODE_TROVE,
        GeodeKind::Coconut => &GEODE_COCONUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_set_is_sorted_and_clean() {
        assert!(CART_ITEMS_1_4.windows(2).all(|w| w[0] < w[1]));
        for id in CART_ITEMS_1_4 {
            let e = object(id).expect("cart id must exist in catalog");
            assert!(e.price > 0 && !e.offlimits && e.category < 0);
        }
    }

    #[test]
    fn later_additions_stay_out_of_the_1_4_cart_set() {
        for id in CART_ITEMS_1_4 {
            let e = object(id).expect("cart id must exist in catalog");
            assert!(
                e.added <= GameVersion::V1_4,
                "id {id} was added in {}",
                e.added.as_str()
            );
        }
    }

    #[test]
    fn roll_table_resolves_every_roll() {
        for (i, id) in CART_ROLL_TO_ID_PRE14.iter().enumerate() {
            let roll = i as i32 + 2;
            let e = object(*id).expect("roll target must exist");
            assert!(e.price > 0 && !e.offlimits, "roll {roll} -> {id}");
        }
    }

    #[test]
    fn geode_tables_reference_catalog_items() {
        for kind in [
            GeodeKind::Regular,
            GeodeKind::Frozen,
            GeodeKind::Magma,
            GeodeKind::Omni,
            GeodeKind::Trove,
            GeodeKind::Coconut,
        ] {
            for (id, qty) in geode_treasures(kind, GameVersion::V1_6) {
                assert!(object(*id).is_some(), "{kind:?} drops unknown id {id}");
                assert!(*qty >= 1);
            }
        }
    }
}
