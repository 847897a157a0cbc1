//! The `tutorkit init` command.

use std::path::Path;

use anyhow::Result;

const SAMPLE_CONFIG: &str = r#"# tutorkit configuration

data_dir = "./data"
default_user = "demo_user"
default_difficulty = 0.5

[thresholds]
intermediate = 0.45
advanced = 0.75
"#;

const SAMPLE_TOPIC: &str = r#"---
topic: Binary Trees
auth_required: false
---

# Binary Trees

<!-- level:beginner -->
## What is a binary tree?

A binary tree is a linked structure in which every node has at most two
children, called left and right.

<!-- examples:start -->
A family tree limited to two children per person is a binary tree. So is
the bracket of a knockout tournament read from the final backwards.
<!-- examples:end -->

<!-- steps:start -->
1. Start at the root node.
2. Compare the value you are looking for with the current node.
3. Go left if it is smaller, right if it is larger.
4. Stop when you find it or run out of nodes.
<!-- steps:end -->

<!-- visuals:start -->
```text
        8
       / \
      3   10
     / \    \
    1   6    14
```
<!-- visuals:end -->

```python
class Node:
    def __init__(self, value):
        self.value = value
        self.left = None
        self.right = None
```
<!-- level:end -->

<!-- level:intermediate -->
## Traversals

<!-- examples:start -->
Inorder traversal of a binary search tree visits values in sorted order.
Preorder is how you would copy a tree, postorder how you would delete one.
<!-- examples:end -->

<!-- practice:start -->
Write an iterative preorder traversal using an explicit stack instead of
recursion, then compare its memory use with the recursive version.
<!-- practice:end -->

<!-- code_python:start -->
```python
def inorder(node, visit):
    if node is None:
        return
    inorder(node.left, visit)
    visit(node.value)
    inorder(node.right, visit)
```
<!-- code_python:end -->
<!-- level:end -->

<!-- level:advanced -->
## Balancing

<!-- summary:start -->
Self-balancing trees keep their height logarithmic by rotating nodes on
insert and delete. AVL trees rebalance more eagerly than red-black trees,
trading slower writes for faster reads.
<!-- summary:end -->

<!-- pitfalls:start -->
Recomputing height recursively on every comparison is O(n) per call.
Cache heights on the nodes or rotations become quadratic.
<!-- pitfalls:end -->

```cpp
int height(Node* node) {
    return node ? 1 + std::max(height(node->left), height(node->right)) : -1;
}
```
<!-- level:end -->
"#;

const SEED_QUESTIONS: &str = r#"{
  "binary-trees": [
    {
      "id": 1,
      "text": "What is the maximum number of nodes at depth d of a binary tree?",
      "options": ["2^d", "2^(d-1)", "2^(d+1)", "2*d"],
      "correct_index": 0
    },
    {
      "id": 2,
      "text": "What is the average time complexity of search in a balanced binary search tree?",
      "options": ["O(n)", "O(log n)", "O(n log n)", "O(1)"],
      "correct_index": 1
    },
    {
      "id": 3,
      "text": "Which traversal visits the root before either subtree?",
      "options": ["Inorder", "Preorder", "Postorder", "Level order"],
      "correct_index": 1
    },
    {
      "id": 4,
      "text": "How many edges does a tree with n nodes have?",
      "options": ["n", "n-1", "n+1", "n/2"],
      "correct_index": 1
    },
    {
      "id": 5,
      "text": "In a full binary tree, every node has how many children?",
      "options": ["0 or 2", "exactly 2", "1 or 2", "at most 1"],
      "correct_index": 0
    }
  ]
}
"#;

pub fn execute() -> Result<()> {
    write_unless_present(Path::new("tutorkit.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("data/topics")?;
    write_unless_present(Path::new("data/topics/binary-trees.md"), SAMPLE_TOPIC)?;
    write_unless_present(Path::new("data/questions.json"), SEED_QUESTIONS)?;

    println!("\nNext steps:");
    println!("  1. List topics:        tutorkit topics");
    println!("  2. Take the quiz:      tutorkit questions --topic binary-trees");
    println!("  3. Grade your answers: tutorkit grade --topic binary-trees --submission answers.json");
    println!("  4. Study at your level: tutorkit content --topic binary-trees");

    Ok(())
}

fn write_unless_present(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}
