//! The static syllabus catalog: three curriculum modules, each with lesson
//! material, a live-preview sample, a practice exercise, a five-question
//! assessment, and summary points.
//!
//! The catalog is read-only; the progress store only depends on its module
//! identifiers and the fixed question count.

use regex::Regex;

use crate::model::{Mcq, ModuleId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub heading: &'static str,
    pub content: &'static [&'static str],
    pub code_example: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LivePreview {
    pub code: &'static str,
    pub explanation: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Practice {
    pub instruction: &'static str,
    pub validation_pattern: &'static str,
    pub success_message: &'static str,
    pub error_message: &'static str,
}

impl Practice {
    /// Check the learner's code against this exercise's validation rule.
    ///
    /// The built-in patterns are verified to compile by unit tests, so a
    /// compile failure here only ever means "no match".
    #[must_use]
    pub fn validate(&self, code: &str) -> bool {
        Regex::new(self.validation_pattern).is_ok_and(|re| re.is_match(code))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub points: &'static [&'static str],
}

/// One curriculum module's full teaching material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyllabusModule {
    pub id: ModuleId,
    pub title: &'static str,
    pub topics: &'static [&'static str],
    pub lesson: Lesson,
    pub live_preview: LivePreview,
    pub practice: Practice,
    pub assessment: [Mcq; 5],
    pub summary: Summary,
}

impl SyllabusModule {
    /// Look up a module's teaching material.
    #[must_use]
    pub fn get(id: ModuleId) -> &'static SyllabusModule {
        match id {
            ModuleId::HtmlCss => &HTML_CSS,
            ModuleId::Python => &PYTHON,
            ModuleId::Javascript => &JAVASCRIPT,
        }
    }

    /// All modules in syllabus order.
    #[must_use]
    pub fn all() -> [&'static SyllabusModule; 3] {
        [&HTML_CSS, &PYTHON, &JAVASCRIPT]
    }
}

static HTML_CSS: SyllabusModule = SyllabusModule {
    id: ModuleId::HtmlCss,
    title: "HTML & CSS Layouts",
    topics: &[
        "div and class",
        "Flexbox rows and columns",
        "Forms and inputs",
        "Images and links",
        "CSS Types",
    ],
    lesson: Lesson {
        heading: "Structuring the Web with HTML & CSS",
        content: &[
            "HTML uses elements like <div> to group content. By using classes, we can apply specific CSS styles to these groups.",
            "Flexbox is a layout tool that helps us arrange elements in rows or columns easily.",
            "Forms are used to collect user data using <input> tags.",
            "CSS can be Inline (in the tag), Internal (in <style> tags), or External (in a separate .css file).",
        ],
        code_example: r##"<div class="container">
  <div class="box">Item 1</div>
  <div class="box">Item 2</div>
</div>

<style>
.container {
  display: flex;
  flex-direction: row;
  gap: 10px;
}
.box {
  background: #4f81bd;
  padding: 20px;
  color: white;
}
</style>"##,
    },
    live_preview: LivePreview {
        code: r##"<!DOCTYPE html>
<html>
<head>
<style>
  .navbar {
    display: flex;
    justify-content: space-between;
    background: #1f3a5f;
    padding: 15px;
    color: white;
  }
  form {
    margin-top: 20px;
    padding: 10px;
    border: 1px solid #d0d7de;
  }
</style>
</head>
<body>
  <div class="navbar">
    <span>My Website</span>
    <a href="#" style="color: white">Home</a>
  </div>

  <form>
    <label>User Name:</label>
    <input type="text" placeholder="Enter name">
    <button type="submit">Submit</button>
  </form>
</body>
</html>"##,
        explanation: "In this preview, we see a Navbar created with Flexbox and a simple Form. The CSS is 'Internal' because it's inside the <style> tag.",
    },
    practice: Practice {
        instruction: "Create a simple form with a text input and a submit button. Use a <div> with a class 'form-container' to wrap them.",
        validation_pattern: r#"(?i)<div.*class=["']form-container["'].*>[\s\S]*<input.*type=["']text["'].*>[\s\S]*<button.*>[\s\S]*</div>"#,
        success_message: "Excellent! You structured your HTML correctly using a div class and input fields.",
        error_message: "Oops! Make sure you have a div with class 'form-container', an input, and a button inside it.",
    },
    assessment: [
        Mcq {
            question: "Which tag is used to group content together in HTML?",
            options: ["<span>", "<div>", "<body>", "<section>"],
            correct_index: 1,
        },
        Mcq {
            question: "What CSS property turns a container into a flexible layout?",
            options: [
                "display: block",
                "display: flex",
                "layout: grid",
                "align: items",
            ],
            correct_index: 1,
        },
        Mcq {
            question: "Which type of CSS is written inside a separate .css file?",
            options: ["Internal", "Inline", "External", "Linked"],
            correct_index: 2,
        },
        Mcq {
            question: "What does the <input> tag usually go inside of to collect user data?",
            options: ["<div>", "<a>", "<form>", "<img>"],
            correct_index: 2,
        },
        Mcq {
            question: "How do you specify a class in CSS?",
            options: ["#className", ".className", "@className", "*className"],
            correct_index: 1,
        },
    ],
    summary: Summary {
        points: &[
            "Learned how to use <div> and classes for grouping.",
            "Understood the basics of Flexbox for layouts.",
            "Practiced creating forms and input elements.",
            "Identified Inline, Internal, and External CSS types.",
        ],
    },
};

static PYTHON: SyllabusModule = SyllabusModule {
    id: ModuleId::Python,
    title: "Python Logic & Variables",
    topics: &[
        "Variables (str, int, float)",
        "Math Operators",
        "If / Elif / Else",
    ],
    lesson: Lesson {
        heading: "Programming Logic with Python",
        content: &[
            "Variables store data. Python has different types: string (text), int (whole numbers), and float (decimal numbers).",
            "We can perform math using operators like + (add), - (subtract), * (multiply), / (divide), % (remainder), and ** (power).",
            "Decision making is done using 'if', 'elif', and 'else' statements.",
        ],
        code_example: r#"age = 15
if age >= 18:
    print("You are an adult")
else:
    print("You are a student")"#,
    },
    live_preview: LivePreview {
        code: r#"score = 85

if score >= 90:
    print("Grade: A")
elif score >= 80:
    print("Grade: B")
else:
    print("Grade: C")

result = 10 * (5 + 2)
print("Calculation Result:", result)"#,
        explanation: "This code uses an 'if/elif/else' structure to check a score variable. It also demonstrates math operators in the calculation.",
    },
    practice: Practice {
        instruction: "Create a variable named 'score' and set it to any number. Use if/else to print 'Pass' if the score is 50 or higher, otherwise print 'Fail'.",
        validation_pattern: r"(?i)score\s*=\s*\d+[\s\S]*if\s*score\s*>=\s*50[\s\S]*print\(.*\bPass\b.*\)[\s\S]*else[\s\S]*print\(.*\bFail\b.*\)",
        success_message: "Great job! You used variables and conditional logic correctly.",
        error_message: "Check your variable name and the if condition logic (>= 50).",
    },
    assessment: [
        Mcq {
            question: "Which of the following represents a float in Python?",
            options: ["'10'", "10", "10.5", "True"],
            correct_index: 2,
        },
        Mcq {
            question: "Which operator is used to calculate the remainder of a division?",
            options: ["/", "*", "%", "**"],
            correct_index: 2,
        },
        Mcq {
            question: "How do you start a conditional check in Python?",
            options: ["while", "if", "for", "check"],
            correct_index: 1,
        },
        Mcq {
            question: "What is the correct way to write an 'otherwise if' in Python?",
            options: ["else if", "elseif", "elif", "case"],
            correct_index: 2,
        },
        Mcq {
            question: "Which operator calculates the power of a number?",
            options: ["^", "**", "*", "exp"],
            correct_index: 1,
        },
    ],
    summary: Summary {
        points: &[
            "Learned about string, integer, and float data types.",
            "Practiced using math operators for calculations.",
            "Mastered conditional statements (if/elif/else) for program flow.",
        ],
    },
};

static JAVASCRIPT: SyllabusModule = SyllabusModule {
    id: ModuleId::Javascript,
    title: "JavaScript & p5.js",
    topics: &[
        "p5.js setup() and draw()",
        "mouseX and mouseY",
        "Arrays",
        "DOM Manipulation",
    ],
    lesson: Lesson {
        heading: "Creative Coding and Interaction",
        content: &[
            "p5.js uses setup() to initialize things once, and draw() to run code repeatedly in a loop.",
            "The mouseX and mouseY variables track the current position of the cursor.",
            "Arrays allow us to store multiple values in a single variable.",
            "DOM manipulation lets JavaScript change elements on a webpage directly.",
        ],
        code_example: r"function setup() {
  createCanvas(400, 400);
}

function draw() {
  background(220);
  circle(mouseX, mouseY, 50);
}",
    },
    live_preview: LivePreview {
        code: r"let colors = ['red', 'green', 'blue'];

function setup() {
  createCanvas(200, 200);
}

function draw() {
  background(255);
  fill(colors[0]);
  rect(mouseX, mouseY, 40, 40);
}",
        explanation: "This sketch uses an array of colors and the mouse position to draw a moving square. The setup() runs once, draw() runs 60 times per second.",
    },
    practice: Practice {
        instruction: "Write a p5.js script that creates a 400x400 canvas and draws an ellipse at the mouse position (mouseX, mouseY).",
        validation_pattern: r"(?i)function\s+setup\(\)[\s\S]*createCanvas\(400,\s*400\)[\s\S]*function\s+draw\(\)[\s\S]*ellipse\(mouseX,\s*mouseY",
        success_message: "Excellent! You've mastered the basics of p5.js coordinate systems.",
        error_message: "Make sure you include setup() with createCanvas(400, 400) and draw() with the ellipse function.",
    },
    assessment: [
        Mcq {
            question: "Which p5.js function runs only once at the start?",
            options: ["draw()", "setup()", "init()", "start()"],
            correct_index: 1,
        },
        Mcq {
            question: "Which variable tells you the current horizontal position of the mouse?",
            options: ["mouseHorizontal", "posX", "mouseX", "curX"],
            correct_index: 2,
        },
        Mcq {
            question: "How do you define an array in JavaScript?",
            options: [
                "let a = {1, 2}",
                "let a = [1, 2]",
                "let a = (1, 2)",
                "let a = <1, 2>",
            ],
            correct_index: 1,
        },
        Mcq {
            question: "What is DOM manipulation?",
            options: [
                "Playing games in the browser",
                "Changing webpage elements with JS",
                "Storing data in a database",
                "Creating animations in Python",
            ],
            correct_index: 1,
        },
        Mcq {
            question: "Which p5.js function repeats infinitely to create animation?",
            options: ["loop()", "animate()", "draw()", "repeat()"],
            correct_index: 2,
        },
    ],
    summary: Summary {
        points: &[
            "Understood the lifecycle of a p5.js sketch (setup and draw).",
            "Used real-time interaction with mouseX and mouseY.",
            "Worked with arrays to store multiple values.",
            "Explored basic DOM interaction concepts.",
        ],
    },
};
