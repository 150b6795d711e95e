use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Words offered as tappable suggestions on the start screen
pub const SUGGESTIONS: [&str; 12] = [
    "dog", "cat", "car", "airplane", "apple", "ball", "bird", "flower", "fish", "train", "cookie",
    "book",
];

static BUILTIN: OnceLock<Arc<LocalAnswers>> = OnceLock::new();

/// Read-only table of keyword -> short explanation
#[derive(Clone, Debug, Default)]
pub struct LocalAnswers {
    entries: HashMap<String, String>,
}

impl LocalAnswers {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into().to_lowercase(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entries.get(keyword).map(String::as_str)
    }

    /// All keywords, sorted for stable iteration
    pub fn keywords(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Shared handle to the compiled-in answers, built on first use
pub fn builtin_answers() -> Arc<LocalAnswers> {
    BUILTIN
        .get_or_init(|| Arc::new(LocalAnswers::from_pairs(builtin_entries())))
        .clone()
}

fn builtin_entries() -> Vec<(&'static str, &'static str)> {
    vec![
        // Animals
        ("dog", "A dog is a furry friend that barks."),
        ("cat", "A cat is a soft pet that says meow and loves to nap."),
        ("bird", "A bird is an animal with feathers and wings, and many birds can fly."),
        ("fish", "A fish lives in water and breathes with gills."),
        ("cow", "A cow is a big farm animal that says moo and gives us milk."),
        ("horse", "A horse is a big, strong animal that people can ride."),
        ("pig", "A pig is a pink farm animal that says oink."),
        ("sheep", "A sheep is a farm animal with fluffy wool that says baa."),
        ("duck", "A duck is a bird that swims and says quack."),
        ("chicken", "A chicken is a farm bird that lays eggs."),
        ("lion", "A lion is a big wild cat with a loud roar."),
        ("tiger", "A tiger is a big wild cat with orange and black stripes."),
        ("elephant", "An elephant is a huge animal with a long trunk."),
        ("giraffe", "A giraffe is a tall animal with a very long neck."),
        ("monkey", "A monkey is a playful animal that climbs trees."),
        ("bear", "A bear is a big furry animal that loves honey."),
        ("rabbit", "A rabbit is a small animal with long ears that hops."),
        ("frog", "A frog is a green animal that jumps and says ribbit."),
        ("turtle", "A turtle is an animal that carries its shell on its back."),
        ("butterfly", "A butterfly is an insect with big colorful wings."),
        ("bee", "A bee is a buzzing insect that makes honey."),
        ("ant", "An ant is a tiny insect that works very hard."),
        ("snake", "A snake is a long animal with no legs that slithers."),
        ("whale", "A whale is the biggest animal in the sea."),
        ("dinosaur", "A dinosaur is an animal that lived a very long time ago."),
        ("owl", "An owl is a bird that stays awake at night and says hoot."),
        ("penguin", "A penguin is a bird that cannot fly but swims very well."),
        ("zebra", "A zebra is a horse-like animal with black and white stripes."),
        // Food
        ("apple", "An apple is a crunchy fruit that can be red, green, or yellow."),
        ("banana", "A banana is a long yellow fruit that you peel."),
        ("orange", "An orange is a round, juicy fruit."),
        ("grape", "A grape is a small, sweet fruit that grows in bunches."),
        ("strawberry", "A strawberry is a sweet red fruit with tiny seeds outside."),
        ("watermelon", "A watermelon is a big green fruit that is red and juicy inside."),
        ("carrot", "A carrot is an orange vegetable that grows in the ground."),
        ("cookie", "A cookie is a sweet treat that is baked in an oven."),
        ("cake", "A cake is a sweet treat we eat on birthdays."),
        ("bread", "Bread is a food made from flour that we bake."),
        ("milk", "Milk is a white drink that helps your bones grow strong."),
        ("cheese", "Cheese is a food made from milk."),
        ("egg", "An egg is a round food that comes from a hen."),
        ("pizza", "Pizza is a round, flat bread with sauce and cheese on top."),
        ("ice cream", "Ice cream is a cold, sweet treat."),
        // Vehicles
        ("car", "A car is a machine with four wheels that takes people places."),
        ("bus", "A bus is a big vehicle that carries lots of people."),
        ("train", "A train is a long vehicle that runs on tracks."),
        ("airplane", "An airplane is a machine that flies in the sky."),
        ("boat", "A boat is something that floats and moves on water."),
        ("bicycle", "A bicycle has two wheels and you ride it by pedaling."),
        ("truck", "A truck is a big vehicle that carries heavy things."),
        ("rocket", "A rocket is a machine that flies up into space."),
        ("helicopter", "A helicopter is a flying machine with spinning blades on top."),
        ("fire truck", "A fire truck is a big red truck that helps put out fires."),
        // Things
        ("ball", "A ball is a round toy you can throw, kick, or bounce."),
        ("book", "A book has pages with words and pictures to read."),
        ("flower", "A flower is the colorful part of a plant that smells nice."),
        ("tree", "A tree is a tall plant with a trunk, branches, and leaves."),
        ("house", "A house is a building where people live."),
        ("chair", "A chair is something you sit on."),
        ("bed", "A bed is where you sleep at night."),
        ("shoe", "A shoe is something you wear on your foot."),
        ("hat", "A hat is something you wear on your head."),
        ("clock", "A clock tells us what time it is."),
        ("phone", "A phone lets you talk to people far away."),
        ("crayon", "A crayon is a colored stick you use to draw."),
        ("drum", "A drum is an instrument you hit to make a beat."),
        ("balloon", "A balloon is a colorful bag filled with air."),
        ("umbrella", "An umbrella keeps you dry when it rains."),
        ("teddy bear", "A teddy bear is a soft toy bear to hug."),
        // Nature
        ("sun", "The sun is a big, hot star that gives us light."),
        ("moon", "The moon shines in the sky at night."),
        ("star", "A star is a tiny light that twinkles in the night sky."),
        ("rain", "Rain is water that falls from clouds."),
        ("snow", "Snow is cold, white, and falls in winter."),
        ("cloud", "A cloud is a fluffy white shape in the sky made of water."),
        ("rainbow", "A rainbow is a colorful arc in the sky after rain."),
        ("ocean", "The ocean is a huge body of salty water."),
        ("mountain", "A mountain is a very big, tall hill."),
        ("water", "Water is a clear drink that all living things need."),
        ("fire", "Fire is hot and bright, and it can burn."),
        ("wind", "Wind is moving air that you can feel but not see."),
    ]
}
